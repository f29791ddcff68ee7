fn main() {
    // Startup failures are fatal and unrecovered at this layer.
    signup_lib::run().expect("Failed to start signup app");
}

//! Signup - enrollment form demo built on trellis
//!
//! This is the bootstrap entry point: build the host document, create the
//! application from the root form component, register the two global
//! components, install the input-mask plugin, and mount at `#app`.

pub mod components;
pub mod error;
pub mod logging;
pub mod mask;

use std::io::{self, Write};

use trellis::{create_app, App, Document, Element};

use error::SignupError;

/// Build the host document the application mounts into
pub fn host_document() -> Document {
    let mut document = Document::new();
    document
        .body_mut()
        .append_child(Element::new("div").with_attr("id", "app"));
    document
}

/// Run the bootstrap sequence against a host document
///
/// Create the application from the root component, register `BaseError` and
/// `BaseButton`, install the input-mask plugin, mount at `#app`. Any failure
/// aborts startup; there is no retry or fallback.
pub fn bootstrap(document: &mut Document) -> Result<App, SignupError> {
    let mut app = create_app(components::SignupForm::new());

    app.component("BaseError", components::BaseError::new())
        .component("BaseButton", components::BaseButton::new())
        .use_plugin(mask::InputMaskPlugin::new())?
        .mount(document, "#app")?;

    Ok(app)
}

/// Application entry point called from the binary
pub fn run() -> Result<(), SignupError> {
    logging::init();

    let mut document = host_document();
    let app = bootstrap(&mut document)?;

    tracing::info!(
        "Signup app mounted at #app with {} components and plugins {:?}",
        app.components().len(),
        app.installed_plugins()
    );
    writeln!(io::stdout(), "{}", document.to_html())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis::{AppState, TrellisError};

    #[test]
    fn test_bootstrap_mounts_the_form() {
        logging::init_test();

        let mut document = host_document();
        let app = bootstrap(&mut document).expect("bootstrap succeeds");

        assert_eq!(app.state(), AppState::Mounted);
        assert!(app.components().contains("BaseError"));
        assert!(app.components().contains("BaseButton"));
        assert_eq!(app.installed_plugins(), &["input-mask".to_string()]);

        let html = document.to_html();
        assert!(html.contains("id=\"signup-form\""));
        assert!(html.contains("Create your account"));
        assert!(html.contains("Sign up"));
    }

    #[test]
    fn test_mask_applied_to_phone_input() {
        let mut document = host_document();
        bootstrap(&mut document).expect("bootstrap succeeds");

        assert!(document.to_html().contains("value=\"(555) 123-4567\""));
    }

    #[test]
    fn test_bootstrap_fails_without_app_node() {
        let mut document = Document::new();
        let err = bootstrap(&mut document).expect_err("no #app in document");

        assert!(matches!(
            err,
            SignupError::Framework(TrellisError::TargetNotFound { .. })
        ));
    }
}

use anyhow::Result;

use starfolio_core::contact::{ContactMessage, EmailJsMailer, Mailer};
use starfolio_core::AppConfig;

/// Send a contact message straight from the command line.
pub async fn run(config: &AppConfig, name: String, email: String, message: String) -> Result<()> {
    let mailer = EmailJsMailer::new(&config.contact)?;
    let message = ContactMessage {
        from_name: name,
        from_email: email,
        message,
    };
    mailer.send(&message).await?;
    println!("Message sent.");
    Ok(())
}

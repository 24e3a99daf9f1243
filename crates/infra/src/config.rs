use chrono_tz::Tz;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// The local calendar of the deployment. Reminder days and times are
    /// matched against the wall clock in this timezone.
    pub timezone: Tz,
    /// Where the due reminders job delivers the reminders firing each minute.
    /// Without it the job only logs what is due.
    pub reminders_webhook: Option<RemindersWebhookSettings>,
}

#[derive(Debug, Clone)]
pub struct RemindersWebhookSettings {
    pub url: String,
    /// Sent in the `nudge-webhook-key` header so that the receiver can verify the sender
    pub key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let timezone = match std::env::var("REMINDERS_TIMEZONE") {
            Ok(tzid) => match tzid.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given REMINDERS_TIMEZONE: {} is not a valid IANA timezone, falling back to UTC.",
                        tzid
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };
        info!("Matching reminders against the {} calendar", timezone);

        let reminders_webhook = match std::env::var("REMINDERS_WEBHOOK_URL") {
            Ok(url) if !url.trim().is_empty() => Some(RemindersWebhookSettings {
                url,
                key: std::env::var("REMINDERS_WEBHOOK_KEY").ok(),
            }),
            _ => {
                info!("Did not find REMINDERS_WEBHOOK_URL environment variable. Due reminders will only be logged.");
                None
            }
        };

        Self {
            port,
            timezone,
            reminders_webhook,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

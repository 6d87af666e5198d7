//! Static sidebar content: crisis contacts and the data-privacy notice.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
}

pub const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "National Suicide Prevention Lifeline",
        contact: "1-800-273-8255",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text 'HELLO' to 741741",
    },
];

pub const MORE_RESOURCES_URL: &str = "https://www.mentalhealth.gov/get-help/immediate-help";

pub const PRIVACY_DISCLAIMER: &str = "This application stores your session data temporarily during your session. \
Data is not saved permanently and is used solely for the chatbot experience. \
Avoid sharing personal or sensitive info.";

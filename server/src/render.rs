use minijinja::{context, Environment};
use serde::Serialize;

use crate::resources::{CRISIS_RESOURCES, MORE_RESOURCES_URL, PRIVACY_DISCLAIMER};
use crate::session::{ChatSession, Speaker};

const CHAT_TEMPLATE: &str = "chat.html";
const PAGE_TITLE: &str = "Mental Health Support Chatbot";

#[derive(Debug, Serialize)]
struct Bubble<'a> {
    sender: &'static str,
    side: &'static str,
    text: &'a str,
}

/// Renders the chat page. Output is HTML-escaped by the template engine.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

/// Optional parts of a rendered page
#[derive(Debug, Default)]
pub struct PageOptions<'a> {
    /// Coping strategy for the turn that was just submitted
    pub strategy: Option<&'a str>,
    /// Show the numbered session summary in the sidebar
    pub show_summary: bool,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(CHAT_TEMPLATE, include_str!("../templates/chat.html"))?;
        Ok(Self { env })
    }

    pub fn render_chat(
        &self,
        session_id: &str,
        chat: &ChatSession,
        options: PageOptions<'_>,
    ) -> Result<String, minijinja::Error> {
        let bubbles: Vec<Bubble<'_>> = chat
            .all_turns()
            .iter()
            .map(|turn| Bubble {
                sender: turn.speaker().display_name(),
                side: match turn.speaker() {
                    Speaker::User => "user",
                    Speaker::Bot => "bot",
                },
                text: turn.text(),
            })
            .collect();

        let summary = options.show_summary.then(|| chat.summary_lines());

        self.env.get_template(CHAT_TEMPLATE)?.render(context! {
            title => PAGE_TITLE,
            session_id => session_id,
            bubbles => bubbles,
            has_mood => !chat.all_mood_records().is_empty(),
            strategy => options.strategy,
            resources => CRISIS_RESOURCES,
            more_resources_url => MORE_RESOURCES_URL,
            summary => summary,
            disclaimer => PRIVACY_DISCLAIMER,
        })
    }
}

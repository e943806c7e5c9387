//! One-shot question handler: dispatch once and print the reply.

use anyhow::Result;

use crate::dispatch::Dispatcher;
use crate::printer;

pub struct AskHandler;

impl AskHandler {
    pub async fn run(
        question: &str,
        dispatcher: &Dispatcher,
        excerpt: Option<&str>,
        markdown: bool,
    ) -> Result<()> {
        let reply = dispatcher.ask(question, excerpt).await;
        // A failed dispatch still answers; the error goes to stderr and the
        // fallback text to stdout, and the process exits cleanly.
        if let Some(error) = reply.error() {
            printer::print_error(error);
        }
        printer::print_answer(reply.text(), markdown);
        Ok(())
    }
}

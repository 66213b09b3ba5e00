//! Message processing
//!
//! Runs one message through the TEA update loop, dispatching actions and
//! following up messages until the chain is exhausted.

use wikiquiz_api::QuizApi;

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(state: &mut AppState, message: Message, ctx: &mut ActionContext<C>)
where
    C: QuizApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

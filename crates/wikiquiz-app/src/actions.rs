//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every network call runs in its own tokio task and reports back with a
//! message carrying the tag it was issued with. In-flight calls are never
//! aborted; controllers drop superseded results when they arrive.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;
use wikiquiz_api::QuizApi;

use crate::debounce::Debouncer;
use crate::message::Message;
use crate::UpdateAction;

/// Everything side effects need: the client, the way back into the loop,
/// and the single preview timer.
pub struct ActionContext<C> {
    client: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
    debouncer: Debouncer,
}

impl<C> ActionContext<C>
where
    C: QuizApi + Send + Sync + 'static,
{
    pub fn new(client: Arc<C>, msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            client,
            msg_tx,
            debouncer: Debouncer::new(),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, ctx: &mut ActionContext<C>)
where
    C: QuizApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::ScheduleDebounce { generation, delay } => {
            ctx.debouncer.schedule(generation, delay, ctx.msg_tx.clone());
        }

        UpdateAction::FetchPreview { tag } => {
            let client = ctx.client.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let result = client.preview_title(&tag.key).await;
                send(&msg_tx, Message::PreviewResolved { tag, result }).await;
            });
        }

        UpdateAction::SubmitGeneration { tag, request } => {
            let client = ctx.client.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let result = client.submit_generation(&request).await;
                send(&msg_tx, Message::GenerationResolved { tag, result }).await;
            });
        }

        UpdateAction::FetchHistory { tag } => {
            let client = ctx.client.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let result = client.list_history().await;
                send(&msg_tx, Message::HistoryResolved { tag, result }).await;
            });
        }

        UpdateAction::FetchDetail { tag } => {
            let client = ctx.client.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_detail(tag.key).await;
                send(&msg_tx, Message::DetailResolved { tag, result }).await;
            });
        }
    }
}

pub(crate) async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        // Receiver gone: the app is shutting down.
        debug!("Message channel closed, dropping result");
    }
}

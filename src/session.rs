use crate::app::App;
use crate::constants::FALLBACK_REPLY;
use crate::models::Message;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Starts one exchange: appends the user message, flips the generating flag,
/// and spawns the request task. The input control keeps this from being
/// called while a generation is outstanding; the extra check here is cheap.
pub fn send(app: &mut App, app_arc: Arc<Mutex<App>>, content: String) {
    let content = content.trim().to_string();
    if content.is_empty() || app.is_generating {
        return;
    }

    app.messages.push(Message::user(content.clone()));
    app.is_generating = true;
    app.status.set_thinking(true);
    app.typewriter = None;

    let handle = tokio::spawn(run_exchange(app_arc, content));
    app.generation = Some(handle);
}

/// The request task. Aborting it (stop) skips every step below the await:
/// no assistant append, no persistence. The user message stays in the list.
pub async fn run_exchange(app: Arc<Mutex<App>>, content: String) {
    let (client, history) = {
        let guard = app.lock().await;
        let mut history = guard.messages.clone();
        // the raw question was already appended; the prefixed copy replaces
        // it as the final turn on the wire
        history.pop();
        (guard.client.clone(), history)
    };

    match client.generate(&history, &content).await {
        Ok(response) => {
            let mut guard = app.lock().await;
            guard.messages.push(Message::assistant(response.content.clone()));
            guard.start_typewriter(&response.content);
            if let Some(usage) = &response.usage {
                info!(
                    "tokens used - input: {}, output: {}",
                    usage.input_tokens, usage.output_tokens
                );
            }
            guard.commit_exchange();
            guard.finish_generation();
        }
        Err(e) => {
            error!("exchange failed: {}", e);
            let mut guard = app.lock().await;
            guard.messages.push(Message::assistant(FALLBACK_REPLY));
            guard.start_typewriter(FALLBACK_REPLY);
            guard.finish_generation();
        }
    }
}

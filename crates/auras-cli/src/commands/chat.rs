use std::io::Write;

use auras_core::entities::ChatMessage;
use auras_core::payloads::{ChatContext, ChatRequest};
use auras_services::Services;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::output::output;

/// Handle `auras chat`.
///
/// Streamed answers are written to stdout chunk by chunk as they arrive;
/// plain answers are printed as a [`ChatMessage`].
pub async fn handle(args: &ChatArgs, services: &Services, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = build_request(args);

    if args.stream {
        let mut stdout = std::io::stdout();
        services
            .ai
            .send_message_stream(&request, |chunk| {
                let _ = stdout.write_all(chunk.as_bytes());
                let _ = stdout.flush();
            })
            .await?;
        println!();
        return Ok(());
    }

    let response = services.ai.send_message(&request).await?;
    let message = ChatMessage::from_response(&response)?;
    output(&message, flags.format)
}

fn build_request(args: &ChatArgs) -> ChatRequest {
    let request = ChatRequest::new(args.message.clone());
    if args.project_id.is_none() && args.sprint_id.is_none() {
        return request;
    }
    request.with_context(ChatContext {
        project_id: args.project_id.clone(),
        sprint_id: args.sprint_id.clone(),
        user_id: None,
    })
}

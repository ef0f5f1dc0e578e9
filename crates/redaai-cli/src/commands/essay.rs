use std::path::Path;

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use redaai_api::auth::AuthUser;

use super::AppContext;

pub async fn submit(ctx: &AppContext, file: &Path, email: &str) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    // The store takes the submission email from the profile; a CLI run
    // has no login step in-process, so seed it here.
    ctx.users.set_user(&AuthUser {
        name: String::new(),
        email: email.to_string(),
        score: 0.0,
        last_access: None,
        created_at: None,
    });

    ctx.essays.set_essay_text(&text);
    println!("Characters: {}", ctx.essays.character_count());

    if !ctx.essays.submit_essay().await {
        bail!(error_of(ctx, "submission failed"));
    }

    let ids = ctx.essays.submitted_ids();
    if let Some(essay_id) = ids.last() {
        println!("Essay accepted: {essay_id}");
    }
    ctx.essays.reset();
    Ok(())
}

pub async fn transcribe(ctx: &AppContext, image: &Path) -> Result<()> {
    let bytes =
        std::fs::read(image).with_context(|| format!("failed to read {}", image.display()))?;
    let encoded = STANDARD.encode(bytes);

    match ctx.essays.transcribe_image(&encoded).await {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => bail!(error_of(ctx, "transcription failed")),
    }
}

fn error_of(ctx: &AppContext, fallback: &str) -> String {
    let error = ctx.essays.error();
    if error.is_empty() {
        fallback.to_string()
    } else {
        error
    }
}

use anyhow::{Result, bail};

use super::AppContext;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    ctx.session.set_auth_email(email);
    ctx.session.set_password(password);

    if !ctx.session.login().await {
        bail!(error_of(ctx, "login failed"));
    }

    let profile = ctx.users.profile();
    println!("Logged in as {} <{}>", profile.name, profile.email);
    println!("Score: {}", profile.score);
    Ok(())
}

pub async fn signup(
    ctx: &AppContext,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<()> {
    ctx.session.set_name(name);
    ctx.session.set_auth_email(email);
    ctx.session.set_password(password);
    ctx.session.set_confirm_password(confirm_password);

    // Validation is the caller's responsibility; the store only reports
    // transport outcomes.
    if let Some(message) = ctx.session.validation_error() {
        bail!(message.to_string());
    }

    if !ctx.session.sign_up().await {
        bail!(error_of(ctx, "sign-up failed"));
    }

    println!("Account registered for {email}");
    Ok(())
}

pub async fn forgot_password(ctx: &AppContext, email: &str) -> Result<()> {
    ctx.session.set_auth_email(email);

    if !ctx.session.forgot_password().await {
        bail!(error_of(ctx, "password recovery failed"));
    }

    println!("Recovery email requested for {email}");
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.session.logout().await;
    println!("Session cleared");
    Ok(())
}

pub async fn status(ctx: &AppContext) -> Result<()> {
    match ctx.tokens.load().await? {
        Some(_) => println!("Session: token present"),
        None => println!("Session: not logged in"),
    }

    match ctx.preferences.is_dark().await? {
        Some(true) => println!("Theme: dark"),
        Some(false) => println!("Theme: light"),
        None => println!("Theme: default (light)"),
    }
    Ok(())
}

fn error_of(ctx: &AppContext, fallback: &str) -> String {
    ctx.session.error().unwrap_or_else(|| fallback.to_string())
}

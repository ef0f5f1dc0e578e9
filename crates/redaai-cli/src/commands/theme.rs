use anyhow::{Result, bail};

use super::AppContext;

pub async fn theme(ctx: &AppContext, value: Option<&str>) -> Result<()> {
    match value {
        None => {
            match ctx.preferences.is_dark().await? {
                Some(true) => println!("dark"),
                Some(false) => println!("light"),
                None => println!("default (light)"),
            }
            Ok(())
        }
        Some("dark") => {
            ctx.preferences.set_dark(true).await?;
            println!("Theme set to dark");
            Ok(())
        }
        Some("light") => {
            ctx.preferences.set_dark(false).await?;
            println!("Theme set to light");
            Ok(())
        }
        Some(other) => bail!("unknown theme '{other}', expected \"dark\" or \"light\""),
    }
}

use crate::interaction;
use crate::layout::Layout;
use crate::workspace;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct CleanArgs {
    /// Delete without asking
    #[arg(long)]
    yes: bool,
}

pub async fn run(args: CleanArgs) -> Result<()> {
    let layout = Layout::discover()?;

    if !args.yes {
        let [peers, repos] = layout.workspace_dirs();
        let proceed = interaction::confirm(
            &format!("Remove {} and {}?", peers.display(), repos.display()),
            true,
        )?;
        if !proceed {
            println!("Nothing removed.");
            return Ok(());
        }
    }

    workspace::clean(&layout).await?;
    println!("Workspace cleaned.");
    Ok(())
}

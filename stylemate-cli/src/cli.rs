use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use inquire::Text;
use stylemate_core::{Config, HealthCheck, HttpApi, RecommendationController, api_from_config};

use crate::{
    form::{self, FormArgs},
    presenter::TerminalPresenter,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "stylemate", version, about = "Outfit recommendations from the StyleMate backend")]
pub struct Cli {
    /// Override the configured API root, e.g. "http://localhost:5000/api".
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the backend is reachable and its model is loaded.
    Health,

    /// Get outfit recommendations. Missing fields are asked for interactively.
    Recommend {
        #[command(flatten)]
        form: FormArgs,

        /// Submit once and exit instead of offering another round.
        #[arg(long)]
        once: bool,
    },

    /// Set the default API root.
    Configure {
        /// New API root; prompted for when omitted.
        url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { url } => configure(url),
            Command::Health => {
                let mut controller = self.controller()?;
                match controller.check_health().await {
                    HealthCheck::Ready => {
                        println!("{} {}", "✔".green(), controller.api().base_url());
                        Ok(())
                    }
                    outcome => bail!("Backend at {} is not ready ({outcome:?})", controller.api().base_url()),
                }
            }
            Command::Recommend { ref form, once } => {
                let mut controller = self.controller()?;
                controller.check_health().await;
                recommend(&mut controller, form.clone(), once).await
            }
        }
    }

    /// The single controller for this run, owned by the command that needs it.
    fn controller(&self) -> anyhow::Result<RecommendationController<HttpApi>> {
        let config = Config::load()?;
        let api = api_from_config(&config, self.api_url.as_deref())?;
        Ok(RecommendationController::with_presenter(api, TerminalPresenter::default()))
    }
}

async fn recommend(
    controller: &mut RecommendationController<HttpApi>,
    args: FormArgs,
    once: bool,
) -> anyhow::Result<()> {
    let mut input = match args.complete() {
        Some(input) => input,
        None => form::prompt_form(&args.into_defaults())?,
    };

    loop {
        controller.fill_form(input.clone());
        controller.get_recommendations().await;

        if once || !form::ask_again()? {
            return Ok(());
        }
        input = form::prompt_form(&input)?;
    }
}

fn configure(url: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = match url {
        Some(url) => url,
        None => Text::new("API root:")
            .with_default(config.api_base_url())
            .prompt()
            .context("Failed to read API root")?,
    };

    config.set_api_base_url(&url)?;
    let path = config.save()?;

    println!("Saved API root {} to {}", config.api_base_url().bold(), path.display());
    Ok(())
}

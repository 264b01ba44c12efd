use anyhow::Result;
use clap::Parser;
use dialoguer::{Input, Password};
use dreamframe::app::{App, GenerationInputs};
use dreamframe::models::Config;
use dreamframe::render::render_outcome;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "dreamframe")]
#[command(about = "Generate images from a text prompt with Gemini")]
struct CliArgs {
    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Prompt text. Read from stdin when neither this nor PROMPT words are given.
    #[arg(short, long, conflicts_with = "words")]
    prompt: Option<String>,

    /// Prompt given as trailing words.
    #[arg(value_name = "PROMPT")]
    words: Vec<String>,

    /// Directory the images are written to (created if missing).
    #[arg(short, long, env = "DREAMFRAME_OUTPUT_DIR", default_value = "outputs")]
    output_dir: PathBuf,

    /// Output file name without extension.
    #[arg(short = 'n', long, default_value = "generated_image")]
    file_name: String,

    /// Gemini image model ID.
    #[arg(long, env = "GEMINI_IMAGE_MODEL")]
    model: Option<String>,

    /// Override the Gemini API base URL.
    #[arg(long, env = "GEMINI_BASE_URL")]
    base_url: Option<String>,

    /// Ask for any missing value on the terminal.
    #[arg(short, long)]
    interactive: bool,
}

impl CliArgs {
    fn prompt_from_args(&self) -> Option<String> {
        match (&self.prompt, self.words.is_empty()) {
            (Some(prompt), _) => Some(prompt.clone()),
            (None, false) => Some(self.words.join(" ")),
            (None, true) => None,
        }
    }
}

fn read_stdin_prompt() -> std::io::Result<Option<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok(Some(buf))
}

fn collect_inputs(args: &CliArgs) -> dreamframe::Result<GenerationInputs> {
    let mut api_key = args.api_key.clone().unwrap_or_default();
    let mut prompt = match args.prompt_from_args() {
        Some(prompt) => prompt,
        None if args.interactive => String::new(),
        None => read_stdin_prompt()?.unwrap_or_default(),
    };
    let mut output_dir = args.output_dir.clone();
    let mut file_base_name = args.file_name.clone();

    if args.interactive {
        if api_key.is_empty() {
            api_key = Password::new()
                .with_prompt("Gemini API key")
                .allow_empty_password(true)
                .interact()?;
        }
        if prompt.trim().is_empty() {
            prompt = Input::new()
                .with_prompt("Prompt")
                .allow_empty(true)
                .interact_text()?;
        }
        let dir: String = Input::new()
            .with_prompt("Output folder path")
            .default(output_dir.display().to_string())
            .interact_text()?;
        output_dir = PathBuf::from(dir);
        file_base_name = Input::new()
            .with_prompt("Output file name (without extension)")
            .default(file_base_name)
            .allow_empty(true)
            .interact_text()?;
    }

    Ok(GenerationInputs {
        api_key,
        prompt,
        output_dir,
        file_base_name,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dreamframe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    let config = Config::resolve(args.model.clone(), args.base_url.clone());

    let inputs = match collect_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            error!("Failed to read inputs: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = inputs.validate() {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    info!("Generating image into {}", inputs.output_dir.display());
    let app = App::new(inputs.api_key.clone(), &config);

    match app.generate(&inputs).await.and_then(|o| render_outcome(&o)) {
        Ok(report) => {
            print!("{}", report);
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

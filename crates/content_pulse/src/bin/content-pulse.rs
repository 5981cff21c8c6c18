use std::path::{Path, PathBuf};

use clap::Parser;
use content_pulse::{
    gemini,
    parser::{parse_generated, ParsedContent},
    tracing::init_tracing_subscriber,
    CaptionFetcher, ContentPipelineBuilder, ContentRequest, GeminiClient, Platform,
    PlatformContent,
};

#[derive(Parser)]
#[command(
    name = "content-pulse",
    about = "Generate blog posts, summaries and notes from YouTube videos"
)]
struct Cli {
    /// YouTube video URL or bare 11-character video id
    #[arg(required_unless_present = "list_models")]
    video: Option<String>,

    /// Output format to generate (repeatable): "Tutorial Blog", "Summary",
    /// "Note Taking", or any social platform name
    #[arg(short, long = "format", required_unless_present = "list_models")]
    formats: Vec<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Gemini model to generate with
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    model: String,

    /// Optional instruction forwarded to every prompt
    #[arg(short, long)]
    query: Option<String>,

    /// Preferred transcript languages, in order of preference
    #[arg(long, default_value = "en", value_delimiter = ',')]
    languages: Vec<String>,

    /// Print the rendered prompts instead of calling the model
    #[arg(long)]
    dry_run: bool,

    /// List the available Gemini models and exit
    #[arg(long)]
    list_models: bool,

    /// Directory to also write the generated content to
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    if cli.list_models {
        for model in gemini::available_models() {
            println!("{model}");
        }
        return Ok(());
    }

    if cli.api_key.is_empty() {
        anyhow::bail!(
            "No API key provided. Pass --api-key or set GEMINI_API_KEY \
             (get one for free at https://aistudio.google.com)."
        );
    }

    let video = cli
        .video
        .ok_or_else(|| anyhow::anyhow!("missing video argument"))?;

    let request = ContentRequest {
        video,
        model: cli.model,
        platforms: cli.formats.iter().map(|f| Platform::from_label(f)).collect(),
        user_query: cli.query,
    };

    let pipeline = ContentPipelineBuilder::new()
        .transcript_fetcher(CaptionFetcher)
        .generator(GeminiClient::new(&cli.api_key))
        .languages(cli.languages)
        .build();

    if cli.dry_run {
        for (platform, prompt) in pipeline.preview_prompts(&request).await? {
            println!("--- {platform} ---\n{prompt}\n");
        }
        return Ok(());
    }

    tracing::info!(video = %request.video, model = %request.model, "Generating content...");
    let results = pipeline.run(&request).await?;

    for item in &results {
        render(item);

        if let (Some(dir), Ok(content)) = (cli.output_dir.as_deref(), &item.result) {
            let parsed = parse_generated(&item.platform, content);
            write_output(dir, &item.platform, &parsed)?;
        }
    }

    Ok(())
}

fn render(item: &PlatformContent) {
    println!("=== {} ===", item.platform);

    let content = match &item.result {
        Ok(content) => content,
        Err(e) => {
            println!("[Error generating for {}: {}]\n", item.platform, e);
            return;
        }
    };

    match parse_generated(&item.platform, content) {
        ParsedContent::Post {
            final_post,
            summary,
            blog,
        } => {
            if !final_post.is_empty() {
                println!("# Final Post\n{final_post}\n");
            }
            if !summary.is_empty() {
                println!("# Summary\n{summary}\n");
            }
            println!("# Blog\n{blog}\n");
        }
        ParsedContent::Summary { summary, takeaways } => {
            println!("# Summary\n{summary}\n");
            println!("# Key Takeaways\n{takeaways}\n");
        }
        ParsedContent::Notes { summary, notes } => {
            println!("# Summary\n{summary}\n");
            println!("# Main Notes\n{notes}\n");
        }
    }
}

fn write_output(dir: &Path, platform: &Platform, parsed: &ParsedContent) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;

    let (file_name, contents) = match parsed {
        ParsedContent::Post {
            final_post,
            summary,
            blog,
        } => match platform {
            Platform::TutorialBlog => ("tutorial_blog.md".to_string(), blog.clone()),
            _ => (
                format!(
                    "{}_content.txt",
                    platform.label().to_lowercase().replace(' ', "_")
                ),
                format!("{final_post}\n\n{summary}\n\n{blog}"),
            ),
        },
        ParsedContent::Summary { summary, takeaways } => (
            "content_hub_summary.md".to_string(),
            format!("Summary:\n{summary}\n\nKey Takeaways:\n{takeaways}"),
        ),
        ParsedContent::Notes { summary, notes } => (
            "notes.md".to_string(),
            format!("Summary:\n{summary}\n\nMain Notes:\n{notes}"),
        ),
    };

    let path = dir.join(file_name);
    std::fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), %platform, "Wrote generated content");

    Ok(())
}

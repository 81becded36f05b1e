use clap::{Parser, Subcommand};
use restyle_engine::{validate_prompt, StaticTemplateEngine, StyleEngine, SUGGESTIONS};

#[derive(Parser)]
#[command(name = "restyle")]
#[command(about = "restyle — turn natural-language style prompts into stylesheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a stylesheet from a prompt
    Generate {
        /// Style prompt, e.g. "make it feel like Christmas"
        prompt: String,

        /// Write the stylesheet to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the tags the classifier detects in a prompt
    Tags {
        /// Style prompt to classify
        prompt: String,
    },

    /// Show the resolved style descriptor as JSON
    Inspect {
        /// Style prompt to resolve
        prompt: String,
    },

    /// List the canned suggestion prompts
    Suggest,

    /// Write a standalone demo page with the generated stylesheet inlined
    Preview {
        /// Style prompt
        prompt: String,

        /// Output HTML file
        #[arg(short, long, default_value = "preview.html")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { prompt, output } => cmd_generate(&prompt, output.as_deref()),
        Command::Tags { prompt } => cmd_tags(&prompt),
        Command::Inspect { prompt } => cmd_inspect(&prompt),
        Command::Suggest => cmd_suggest(),
        Command::Preview { prompt, output } => cmd_preview(&prompt, &output),
    }
}

fn checked_prompt(prompt: &str) -> &str {
    match validate_prompt(prompt) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_generate(prompt: &str, output: Option<&str>) {
    let prompt = checked_prompt(prompt);
    let css = StaticTemplateEngine::new().generate(prompt);

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &css) {
                eprintln!("Error writing {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Wrote: {path}");
        }
        None => print!("{css}"),
    }
}

fn cmd_tags(prompt: &str) {
    let prompt = checked_prompt(prompt);
    let tags = StaticTemplateEngine::new().classify(prompt);

    if tags.is_empty() {
        eprintln!("(no tags — the default template applies)");
        return;
    }
    for tag in tags.iter() {
        println!("{tag}");
    }
}

fn cmd_inspect(prompt: &str) {
    let prompt = checked_prompt(prompt);
    let style = StaticTemplateEngine::new().resolve(prompt);

    match serde_json::to_string_pretty(&style) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing descriptor: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_suggest() {
    for suggestion in SUGGESTIONS {
        println!("{suggestion}");
    }
}

fn cmd_preview(prompt: &str, output: &str) {
    let prompt = checked_prompt(prompt);
    let css = StaticTemplateEngine::new().generate(prompt);
    let html = demo_page(prompt, &css);

    if let Err(e) = std::fs::write(output, html) {
        eprintln!("Error writing {output}: {e}");
        std::process::exit(1);
    }
    eprintln!("Built: {output}");
}

/// Build a standalone demo page: feature cards and a contact form, the
/// structural roles the emitter's selectors target. The generated
/// stylesheet is inlined wholesale; regenerating replaces it entirely.
fn demo_page(prompt: &str, css: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>restyle preview</title>\n");
    html.push_str(&format!("  <style>\n{css}  </style>\n"));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "  <h1>restyle preview</h1>\n  <p>Prompt: {}</p>\n",
        escape_html(prompt)
    ));

    html.push_str("  <h2>Product Features</h2>\n");
    for (title, body) in [
        ("Feature One", "This feature does amazing things for your workflow."),
        ("Feature Two", "Enhance your creativity with this powerful tool."),
        ("Feature Three", "Streamline your processes with our approach."),
    ] {
        html.push_str(&format!(
            "  <div class=\"card\">\n    <h3 class=\"card-title\">{title}</h3>\n    <p class=\"card-description\">{body}</p>\n    <button class=\"btn\">Learn More</button>\n  </div>\n"
        ));
    }

    html.push_str("  <h2>Contact Us</h2>\n  <div class=\"card\">\n");
    html.push_str("    <h3 class=\"card-title\">Get in Touch</h3>\n");
    html.push_str("    <form>\n");
    html.push_str("      <input class=\"input\" placeholder=\"Your name\">\n");
    html.push_str("      <input class=\"input\" type=\"email\" placeholder=\"Your email\">\n");
    html.push_str("      <textarea class=\"textarea\" placeholder=\"Your message\"></textarea>\n");
    html.push_str("      <button class=\"btn\">Send Message</button>\n");
    html.push_str("    </form>\n  </div>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

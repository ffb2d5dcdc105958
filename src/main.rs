use anyhow::{anyhow, Context, Result};
use foliochat::agent::llm::LlmClient;
use foliochat::agent::state::ConversationState;
use foliochat::agent::Agent;
use foliochat::config::Config;
use foliochat::tools::builtin::{GetCurrentDateTimeTool, GetMyInfoTool, GreetUserTool};
use foliochat::tools::fetch::{
    FetchCurrentWeatherTool, FetchTodoByIdTool, FetchTodosTool, FetchUsersTool, GetUserTool,
};
use foliochat::tools::registry::ToolRegistry;
use std::env;
use std::io::{self, Write};

struct Args {
    message: Option<String>,
    config: String,
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let mut parsed = Args {
        message: None,
        config: "config.json".to_string(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-m" | "--message" => parsed.message = args.next(),
            "-c" | "--config" => {
                if let Some(c) = args.next() {
                    parsed.config = c;
                }
            }
            "-h" | "--help" => {
                println!("foliochat - portfolio chatbot agent");
                println!();
                println!("Usage: foliochat [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -m, --message <MSG>  Send a single message to the agent and exit");
                println!("  -c, --config <PATH>  Path to config.json (default: config.json)");
                println!("  -h, --help           Display this help message");
                println!();
                println!("Without -m, foliochat starts an interactive prompt loop.");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}. Use --help for usage.", arg);
                std::process::exit(1);
            }
        }
    }
    parsed
}

/// Credential resolution is an explicit startup step: config file first,
/// then environment, then a one-time blocking console prompt.
fn resolve_api_key(config: &Config) -> Result<String> {
    if !config.provider.api_key.is_empty() {
        return Ok(config.provider.api_key.clone());
    }
    if let Ok(key) = env::var("OPENAI_API_KEY") {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }
    print!("Enter your OpenAI API key: ");
    io::stdout().flush()?;
    let mut key = String::new();
    io::stdin().read_line(&mut key)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("no API key provided"));
    }
    Ok(key.to_string())
}

fn build_registry(config: &Config, client: reqwest::blocking::Client) -> ToolRegistry {
    let base = config.endpoints.placeholder_base.trim_end_matches('/');
    let weather_base = config.endpoints.weather_base.trim_end_matches('/');

    let mut registry = ToolRegistry::new();
    registry.register(Box::new(GetMyInfoTool));
    registry.register(Box::new(GreetUserTool));
    registry.register(Box::new(GetCurrentDateTimeTool));
    registry.register(Box::new(GetUserTool {
        client: client.clone(),
        base_url: base.to_string(),
    }));
    registry.register(Box::new(FetchUsersTool {
        client: client.clone(),
        base_url: base.to_string(),
    }));
    registry.register(Box::new(FetchTodosTool {
        client: client.clone(),
        base_url: base.to_string(),
    }));
    registry.register(Box::new(FetchTodoByIdTool {
        client: client.clone(),
        base_url: base.to_string(),
    }));
    registry.register(Box::new(FetchCurrentWeatherTool {
        client,
        base_url: weather_base.to_string(),
        api_key: config.endpoints.weather_key.clone(),
    }));
    registry
}

fn repl(agent: &Agent, state: &mut ConversationState) -> Result<()> {
    loop {
        print!("Prompt: ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF
            return Ok(());
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            return Ok(());
        }

        match agent.run(state, input) {
            Ok(answer) => println!("{}\n", answer),
            // The read loop must outlive a flaky provider.
            Err(e) => println!("The assistant is unavailable right now: {}\n", e),
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("foliochat=info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load_or_default(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config))?;
    config.provider.api_key = resolve_api_key(&config)?;

    let http = reqwest::blocking::Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .build()
        .context("failed to build HTTP client")?;

    let registry = build_registry(&config, http.clone());
    let model = LlmClient::new(http, &config.provider, &config.agent.model);
    let agent = Agent::new(
        Box::new(model),
        registry,
        config.agent.max_tool_iterations,
    );

    let mut state = ConversationState::new();

    if let Some(message) = args.message {
        let answer = agent.run(&mut state, &message)?;
        println!("{}", answer);
        return Ok(());
    }

    repl(&agent, &mut state)
}

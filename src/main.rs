use clap::Parser;
use solid_principles::adapters::StdoutSink;
use solid_principles::core::isp::{DeleteButton, EditButton};
use solid_principles::core::lsp::describe;
use solid_principles::core::ocp::PaymentService;
use solid_principles::core::srp::DataListComponent;
use solid_principles::domain::ports::BaseDataService;
use solid_principles::utils::logger::{self, LogFormat};
use solid_principles::utils::validation::Validate;
use solid_principles::{AppComponent, AppModule, CliConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, config.verbose);

    tracing::info!("Starting solid-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let wiring = config.wiring()?;
    let module = match AppModule::from_config(&wiring, Arc::new(StdoutSink)) {
        Ok(module) => module,
        Err(e) => {
            tracing::error!("❌ Wiring failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let injector = module.injector();
    tracing::debug!("{:?}", injector);

    // SRP
    if config.skip_http {
        tracing::info!("Skipping data retrieval");
    } else {
        let mut list = DataListComponent::from_injector(injector)?;
        match list.on_init().await {
            Ok(()) => {
                if let Some(data) = list.data() {
                    println!("Loaded data: {}", data);
                }
            }
            Err(e) => {
                tracing::warn!("Data retrieval failed: {}", e);
                eprintln!("⚠️  {}", e.user_friendly_message());
            }
        }
    }

    // OCP
    PaymentService::from_injector(injector)?.make_payment(config.amount);

    // LSP
    let data_service = injector.get::<dyn BaseDataService>()?;
    println!("Fetched {}", describe(data_service.as_ref()));

    // ISP
    EditButton::from_injector(injector)?.click();
    DeleteButton::from_injector(injector)?.click();

    // DIP
    AppComponent::from_injector(injector)?.greet("hello");
    if let Some(memory) = module.memory_logger() {
        println!("Memory logger holds {:?}", memory.entries());
    }

    tracing::info!("✅ Done");
    Ok(())
}

use clap::Parser;
use plan_photos::adapters::BrowserPresenter;
use plan_photos::core::{ConfigProvider, Presenter};
use plan_photos::utils::error::PlanError;
use plan_photos::utils::{logger, validation::Validate};
use plan_photos::{
    CliConfig, DownloadPresenter, HttpPhotoSource, ListPresenter, OutputMode, PlanImagesEngine,
};

fn exit_with(e: &PlanError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌，guard 存活期間有效
    let _log_guard = logger::init_cli_logger(logger::level_from_debug(config.debug));
    tracing::debug!("CLI config: {:?}", config);

    let site = match config.site_config() {
        Ok(site) => site,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = site.validate() {
        exit_with(&e);
    }

    let source = match HttpPhotoSource::new(site.clone()) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };

    let presenter: Box<dyn Presenter> = match config.output_mode() {
        OutputMode::Browser => Box::new(BrowserPresenter),
        OutputMode::Download => Box::new(DownloadPresenter::new(source.client().clone())),
        OutputMode::List => Box::new(ListPresenter::stdout()),
    };

    let engine = PlanImagesEngine::new(source, site.site_root());

    match engine.run(&config.plan, presenter.as_ref()).await {
        Ok(summary) => {
            if config.output_mode() == OutputMode::Download {
                // 只輸出目錄路徑，方便在 shell 中使用
                println!("{}", summary);
            } else {
                tracing::info!("✅ {}", summary);
            }
        }
        Err(e) => {
            if let PlanError::DownloadIncomplete { directory, failed } = &e {
                for url in failed {
                    eprintln!("   {}", url);
                }
                println!("{}", directory);
            }
            exit_with(&e);
        }
    }

    Ok(())
}

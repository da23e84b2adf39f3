use clap::Parser;
use folio_render::core::render::regions;
use folio_render::core::ConfigProvider;
use folio_render::utils::error::ErrorSeverity;
use folio_render::utils::{logger, validation::Validate};
use folio_render::{
    ApiClient, CliConfig, Command, ContactFields, FolioError, LocalStorage, Page,
    PageDataRenderer, RegionMap, RenderSettings, SiteBuilder, SiteConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting folio-render");
    tracing::debug!("CLI config: {:?}", cli);

    let site = match cli.load_site_config().and_then(|site| {
        site.validate()?;
        Ok(site)
    }) {
        Ok(site) => site,
        Err(e) => exit_with(&e),
    };

    let renderer = PageDataRenderer::new(
        ApiClient::new(site.api_base_url()),
        RenderSettings::from_config(&site),
    );

    let outcome = match &cli.command {
        Command::Build { page, dry_run } => {
            run_build(&site, renderer, page.as_deref(), *dry_run).await
        }
        Command::Contact {
            name,
            email,
            message,
        } => run_contact(renderer, ContactFields::new(name, email, message)).await,
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }
    Ok(())
}

async fn run_build(
    site: &SiteConfig,
    renderer: PageDataRenderer<ApiClient>,
    page: Option<&str>,
    dry_run: bool,
) -> folio_render::Result<()> {
    let pages = match page {
        Some(page) => vec![page.to_string()],
        None => site.pages(),
    };

    let builder = SiteBuilder::new(
        LocalStorage::new(site.template_dir()),
        LocalStorage::new(site.output_dir()),
        renderer,
    );

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        for file in &pages {
            let Some(page) = Page::from_path(file) else {
                tracing::warn!("⚠️ '{}' is not a known page, skipping", file);
                continue;
            };
            let updates = builder.dry_run(page).await;
            tracing::debug!("{}: {} region update(s)", page, updates.len());
            println!("{}", serde_json::to_string_pretty(&updates)?);
        }
        return Ok(());
    }

    let reports = builder.build_all(&pages).await?;

    for report in &reports {
        println!(
            "📄 {} ({} updates) -> {}/{}",
            report.page,
            report.updates_applied,
            site.output_dir(),
            report.file
        );
    }
    println!("✅ Built {} page(s)", reports.len());
    Ok(())
}

async fn run_contact(
    renderer: PageDataRenderer<ApiClient>,
    mut form: ContactFields,
) -> folio_render::Result<()> {
    form.validate()?;

    let mut status = RegionMap::permissive();
    let result = renderer.submit_contact_form(&mut form, &mut status).await;

    let text = status.text(regions::FORM_MESSAGE).unwrap_or_default();
    match result {
        Ok(()) => println!("✅ {}", text),
        Err(_) => eprintln!("❌ {}", text),
    }
    result
}

fn exit_with(e: &FolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

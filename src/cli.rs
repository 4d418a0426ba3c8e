use crate::{
    config::Config,
    pipeline::Extractor,
    records::{dish_doc, menu_doc, DishRecord, MenuRecord, MenuType},
    recover,
    util::{ensure_dir, now_rfc3339, sha256_hex},
};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "cuchara")]
#[command(about = "Heuristic PDF menu extraction (dishes, categories, dietary tags)")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./cuchara.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configured patterns and report crate health.
    Doctor {},
    /// Detect dietary restriction tags only.
    Tags {
        #[arg(long)]
        input: PathBuf,
    },
    /// Parse dish lines only, without writing a job directory.
    Dishes {
        #[arg(long)]
        input: PathBuf,
    },
    /// Full extraction: menu.json + report.json under the output dir.
    Extract {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// When set, also write document-store records and search docs.
        #[arg(long)]
        restaurant_id: Option<String>,
        #[arg(long, value_enum, default_value = "regular")]
        menu_type: MenuTypeArg,
        /// Menu date (daily menus), YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,
        /// Fixed menu price, if any.
        #[arg(long)]
        price: Option<f64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MenuTypeArg {
    Daily,
    Regular,
}

impl From<MenuTypeArg> for MenuType {
    fn from(v: MenuTypeArg) -> Self {
        match v {
            MenuTypeArg::Daily => MenuType::Daily,
            MenuTypeArg::Regular => MenuType::Regular,
        }
    }
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let cfg = Config::load(&cfg_path)?;

    match &args.cmd {
        Command::Doctor {} => {
            let log_path = resolve_log_path(&cfg, None);
            let _guard = init_logging(&args, &cfg, log_path.as_deref())?;
            doctor(&cfg)
        }
        Command::Tags { input } => {
            let log_path = resolve_log_path(&cfg, None);
            let _guard = init_logging(&args, &cfg, log_path.as_deref())?;
            tags(&cfg, input)
        }
        Command::Dishes { input } => {
            let log_path = resolve_log_path(&cfg, None);
            let _guard = init_logging(&args, &cfg, log_path.as_deref())?;
            dishes(&cfg, input)
        }
        Command::Extract {
            input,
            out_dir,
            restaurant_id,
            menu_type,
            date,
            price,
        } => extract(
            &args,
            &cfg,
            input,
            out_dir.as_deref(),
            restaurant_id.as_deref(),
            (*menu_type).into(),
            date.clone(),
            *price,
        ),
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("cuchara.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("cuchara.example.toml"))
    }
}

fn init_logging(args: &Args, cfg: &Config, file_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = file_path {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn doctor(cfg: &Config) -> Result<()> {
    let diag = match Extractor::new(cfg) {
        Ok(_) => serde_json::json!({
            "ok": true,
            "restriction_tags": cfg.restrictions.tags.iter()
                .map(|t| t.tag.as_str()).collect::<Vec<_>>(),
            "price_pattern": cfg.parser.price_pattern,
            "fallback_skip_pattern": cfg.fallback.skip_pattern,
        }),
        Err(err) => serde_json::json!({
            "ok": false,
            "error": format!("{err:#}"),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&diag)?);
    Ok(())
}

fn tags(cfg: &Config, input: &Path) -> Result<()> {
    let bytes = read_input(cfg, input)?;
    let text = recover::recover_text(cfg, &bytes)
        .with_context(|| format!("recovering text: {}", input.display()))?;
    let extractor = Extractor::new(cfg)?;
    let out = extractor.extract_from_text(&text);
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "input": input,
            "menu_restrictions": out.menu.menu_restrictions,
        }))?
    );
    Ok(())
}

fn dishes(cfg: &Config, input: &Path) -> Result<()> {
    let bytes = read_input(cfg, input)?;
    let text = recover::recover_text(cfg, &bytes)
        .with_context(|| format!("recovering text: {}", input.display()))?;
    let extractor = Extractor::new(cfg)?;
    let out = extractor.extract_from_text(&text);
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "input": input,
            "strategy": out.report.strategy,
            "dishes": out.menu.dishes,
        }))?
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn extract(
    args: &Args,
    cfg: &Config,
    input: &Path,
    out_override: Option<&Path>,
    restaurant_id: Option<&str>,
    menu_type: MenuType,
    date: Option<String>,
    price: Option<f64>,
) -> Result<()> {
    let bytes = read_input(cfg, input)?;
    let job_id = sha256_hex(&bytes);

    let out_root = out_override
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.paths.out_dir));
    let job_dir = out_root.join(&job_id);

    ensure_dir(&job_dir)?;
    ensure_dir(&job_dir.join("logs"))?;

    let log_path = resolve_log_path(cfg, Some(&job_dir));
    let _guard = init_logging(args, cfg, log_path.as_deref())?;

    info!("job_id={job_id} out={}", job_dir.display());

    if cfg.debug.dump_effective_config {
        let raw = toml::to_string(cfg).unwrap_or_default();
        std::fs::write(job_dir.join("effective-config.toml"), raw)?;
    }

    let started = now_rfc3339();
    let extractor = Extractor::new(cfg)?;
    let out = extractor.extract(&bytes);

    if cfg.output.write_menu_json {
        std::fs::write(
            job_dir.join(&cfg.output.menu_filename),
            serde_json::to_string_pretty(&out.menu)?,
        )?;
    }

    if cfg.output.write_report_json {
        std::fs::write(
            job_dir.join(&cfg.output.report_filename),
            serde_json::to_string_pretty(&out.report)?,
        )?;
    }

    if let Some(rid) = restaurant_id {
        let menu = MenuRecord::new(
            rid,
            menu_type,
            date,
            &input.display().to_string(),
            price,
            &out.menu,
        );
        let dish_records: Vec<DishRecord> = out
            .menu
            .dishes
            .iter()
            .map(|d| DishRecord::from_parsed(rid, d, &out.menu.menu_restrictions))
            .collect();
        let search_docs: Vec<_> = dish_records
            .iter()
            .enumerate()
            .map(|(i, d)| dish_doc(&format!("{job_id}-{i}"), d))
            .chain(std::iter::once(menu_doc(&job_id, &menu, &dish_records)))
            .collect();
        std::fs::write(
            job_dir.join(&cfg.output.records_filename),
            serde_json::to_string_pretty(&serde_json::json!({
                "menu": menu,
                "dishes": dish_records,
                "search_docs": search_docs,
            }))?,
        )?;
    }

    if cfg.output.write_index_json {
        let index = serde_json::json!({
            "job_id": job_id,
            "input": input,
            "started": started,
            "finished": now_rfc3339(),
            "menu": cfg.output.menu_filename,
            "report": cfg.output.report_filename,
        });
        std::fs::write(job_dir.join("index.json"), serde_json::to_string_pretty(&index)?)?;
    }

    if cfg.global.print_summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "job_id": job_id,
                "job_dir": job_dir,
                "dish_count": out.report.dish_count,
                "strategy": out.report.strategy,
                "menu_restrictions": out.menu.menu_restrictions,
                "status": "ok"
            }))?
        );
    }

    Ok(())
}

fn read_input(cfg: &Config, input: &Path) -> Result<Vec<u8>> {
    validate_input(cfg, input)?;
    let meta = std::fs::metadata(input).with_context(|| "stat input")?;
    if meta.len() > cfg.limits.max_input_file_bytes {
        return Err(anyhow!(
            "input exceeds max_input_file_bytes: {}",
            meta.len()
        ));
    }
    std::fs::read(input).with_context(|| format!("reading input: {}", input.display()))
}

fn validate_input(cfg: &Config, input: &Path) -> Result<()> {
    let input_str = input.display().to_string();

    if cfg.security.reject_url_inputs && looks_like_url(&input_str) {
        return Err(anyhow!("URL inputs are disabled: {input_str}"));
    }

    if !input.exists() {
        return Err(anyhow!("input does not exist: {}", input.display()));
    }

    if let Some(ext) = input.extension().and_then(|s| s.to_str()) {
        if ext.to_ascii_lowercase() != "pdf" {
            warn!("input does not look like a PDF: {}", input.display());
        }
    } else {
        warn!("input has no extension; assuming PDF: {}", input.display());
    }

    Ok(())
}

fn looks_like_url(s: &str) -> bool {
    let s = s.to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("file://")
}

fn resolve_log_path(cfg: &Config, job_dir: Option<&Path>) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }

    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }

    if let Some(job_dir) = job_dir {
        return Some(job_dir.join("logs").join("cuchara.log"));
    }

    Some(PathBuf::from(&cfg.paths.out_dir).join("cuchara.log"))
}

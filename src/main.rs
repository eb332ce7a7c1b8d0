use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fitness_tracker::config::{self, ErrorPolicy, DEFAULT_CONFIG_PATH};
use fitness_tracker::i18n::{self, keys, Translator};
use fitness_tracker::{app, sensor::SensorPackage};

/// 운동 센서 데이터로 거리·속도·소모 칼로리를 계산한다.
#[derive(Parser, Debug)]
#[command(name = "fitness_tracker", version, about)]
struct Cli {
    /// 출력 언어 (auto/en/ko/ru). 지정하지 않으면 설정 파일의 언어를 쓴다.
    #[arg(long, short = 'L', default_value = "")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 언어팩(<lang>.toml) 디렉터리
    #[arg(long)]
    locales: Option<PathBuf>,

    /// 처리할 패키지 (예: SWM:720,1,80,25,40). 지정하면 설정의 목록을 대체한다.
    #[arg(long = "package", short = 'p')]
    packages: Vec<SensorPackage>,

    /// 오류가 난 패키지를 건너뛰고 계속 처리
    #[arg(long)]
    keep_going: bool,

    /// 디버그 로그 출력
    #[arg(long, short = 'v')]
    verbose: bool,

    /// 기본 설정 파일을 만들고 종료
    #[arg(long)]
    init_config: bool,

    /// --init-config 시 기존 설정 파일을 덮어쓴다
    #[arg(long, requires = "init_config")]
    force: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 패키지를 처리한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // 설정 파일이 깨져 있어도 다시 만들 수 있도록 로드 전에 처리한다.
    if cli.init_config {
        let tr = translator(&cli, None);
        return match config::write_default(&cli.config, cli.force) {
            Ok(_) => {
                println!("{} {}", tr.t(keys::CONFIG_WRITTEN), cli.config.display());
                ExitCode::SUCCESS
            }
            Err(err) => fail(&tr, &err),
        };
    }

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => return fail(&translator(&cli, None), &err),
    };

    let log_level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .init();

    let tr = translator(&cli, Some(cfg.language.as_str()));
    if cli.keep_going {
        cfg.on_error = ErrorPolicy::Skip;
    }
    let packages = if cli.packages.is_empty() {
        &cfg.packages
    } else {
        &cli.packages
    };
    match app::run(&cfg, packages, &tr, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => fail(&tr, &err),
    }
}

fn translator(cli: &Cli, config_lang: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(&cli.lang, config_lang.or(Some("en")));
    Translator::new_with_pack(&lang, cli.locales.as_deref())
}

fn fail(tr: &Translator, err: &dyn std::error::Error) -> ExitCode {
    eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
    ExitCode::FAILURE
}

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use steam_eos::app::{self, AppError};
use steam_eos::units::{to_kelvin, to_pa, PressureUnit, TemperatureUnit};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "steam_eos")]
#[command(about = "유효 영역으로 제한한 IAPWS-IF97 물/증기 상태방정식", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 한 (p, T) 점의 물성 계산
    Props {
        /// 상태방정식 TOML 파일 경로
        #[arg(short, long)]
        config: PathBuf,
        /// 절대 압력
        #[arg(short, long, allow_negative_numbers = true)]
        pressure: f64,
        #[arg(long, default_value = "Pa")]
        p_unit: PressureUnit,
        /// 온도
        #[arg(short = 'T', long, allow_negative_numbers = true)]
        temperature: f64,
        #[arg(long, default_value = "K")]
        t_unit: TemperatureUnit,
    },
    /// 고정 온도에서 압력 구간 계산
    Sweep {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short = 'T', long, allow_negative_numbers = true)]
        temperature: f64,
        #[arg(long, default_value = "K")]
        t_unit: TemperatureUnit,
        /// 시작 압력
        #[arg(long)]
        from: f64,
        /// 끝 압력
        #[arg(long)]
        to: f64,
        #[arg(long, default_value = "Pa")]
        p_unit: PressureUnit,
        #[arg(long, default_value_t = 11)]
        steps: usize,
    },
    /// 상태방정식 TOML 파일 검증
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// 여러 상태방정식을 더한 결과 출력
    Mix {
        #[arg(short, long, required = true)]
        config: Vec<PathBuf>,
    },
}

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 하위 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Props {
            config,
            pressure,
            p_unit,
            temperature,
            t_unit,
        } => {
            let eos = app::load_eos(&config)?;
            app::props(
                &eos,
                to_pa(pressure, p_unit),
                to_kelvin(temperature, t_unit),
                &mut out,
            )
        }
        Commands::Sweep {
            config,
            temperature,
            t_unit,
            from,
            to,
            p_unit,
            steps,
        } => {
            let eos = app::load_eos(&config)?;
            app::sweep(
                &eos,
                to_kelvin(temperature, t_unit),
                to_pa(from, p_unit),
                to_pa(to, p_unit),
                steps,
                &mut out,
            )
        }
        Commands::Check { config } => {
            let eos = app::load_eos(&config)?;
            app::check(&eos, &mut out)
        }
        Commands::Mix { config } => {
            let eoses = config
                .iter()
                .map(|path| app::load_eos(path))
                .collect::<Result<Vec<_>, _>>()?;
            app::mix(&eoses, &mut out)
        }
    }
}

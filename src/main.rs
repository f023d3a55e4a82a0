//! 커피숍 배포 설정 출력 도구
//!
//! 프로파일 `.env` 파일과 환경 변수를 반영한 설정을 해석하고 검증한 뒤,
//! 프론트엔드가 읽을 JSON으로 출력합니다.
//!
//! ```bash
//! # 개발 설정을 JSON으로 출력
//! coffee_shop_env > www/assets/environment.json
//!
//! # 운영 설정을 사람이 읽기 쉬운 형태로 출력
//! PROFILE=prod coffee_shop_env --summary
//! ```

use std::io::Write;
use std::process::ExitCode;

use coffee_shop_env::config::{Environment, load_env_file};
use coffee_shop_env::errors::{ConfigResult, ErrorContext};
use coffee_shop_env::utils::display_terminal::print_summary;
use env_logger::Env;
use log::{error, info};

fn main() -> ExitCode {
    // RUST_LOG는 .env 파일에서도 올 수 있음
    let env_file = load_env_file();
    init_logging();
    env_file.log();

    let summary = std::env::args().skip(1).any(|arg| arg == "--summary");

    match run(summary) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("설정 해석 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(summary: bool) -> ConfigResult<()> {
    let resolved = Environment::from_env()?;
    resolved.ensure_valid()?;

    let environment = Environment::install(resolved)?;
    info!("✅ 설정 검증 완료 (production: {})", environment.production);

    if summary {
        print_summary(environment);
        return Ok(());
    }

    let json = environment.to_json_pretty()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).context("표준 출력 쓰기 실패")?;

    Ok(())
}

/// 로깅 시스템을 초기화합니다
///
/// 로그는 표준 에러로 출력되므로 표준 출력의 JSON과 섞이지 않습니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

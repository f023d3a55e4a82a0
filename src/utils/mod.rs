//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 설정 요약 터미널 출력

pub mod display_terminal;

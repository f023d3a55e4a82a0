//! 터미널 출력 포맷팅 유틸리티
//!
//! 해석된 설정을 사람이 읽기 쉬운 박스 형태로 출력합니다.

use crate::config::Environment;

/// 박스 내부 콘텐츠 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 만듭니다
///
/// Unicode 박스 문자를 사용하며, 텍스트는 자동으로 중앙 정렬됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::boxed_title;
///
/// print!("{}", boxed_title("Coffee Shop Environment"));
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             Coffee Shop Environment              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);

    format!(
        "╔{}╗\n║{:^width$}║\n╚{}╝\n",
        border,
        title,
        border,
        width = CONTENT_WIDTH
    )
}

/// 트리 구조의 한 줄을 만듭니다
///
/// Output:
/// ```text
///    ├─ clientId: 7W9s2lZonVSCEPm2Z4fy3UvP7bqgWH3A
/// ```
pub fn tree_line(name: &str, value: &str) -> String {
    format!("   ├─ {}: {}\n", name, value)
}

/// 설정 요약 문자열을 만듭니다
///
/// 필드 이름은 JSON 형식과 동일하게 표시합니다.
pub fn format_summary(environment: &Environment) -> String {
    let mut out = boxed_title("Coffee Shop Environment");
    out.push_str(&tree_line("production", &environment.production.to_string()));
    out.push_str(&tree_line("apiServerUrl", &environment.api_server_url));
    out.push_str("   └─ auth0\n");
    out.push_str(&format!("   {}", tree_line("url", &environment.auth0.url)));
    out.push_str(&format!("   {}", tree_line("audience", &environment.auth0.audience)));
    out.push_str(&format!("   {}", tree_line("clientId", &environment.auth0.client_id)));
    out.push_str(&format!("   {}", tree_line("callbackURL", &environment.auth0.callback_url)));
    out
}

/// 설정 요약을 표준 출력에 출력합니다
pub fn print_summary(environment: &Environment) {
    print!("{}", format_summary(environment));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let title = boxed_title("abc");
        let lines: Vec<&str> = title.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[1].contains("abc"));
    }

    #[test]
    fn test_summary_lists_every_field() {
        let summary = format_summary(&Environment::development());

        assert!(summary.contains("production: false"));
        assert!(summary.contains("apiServerUrl: http://127.0.0.1:5000"));
        assert!(summary.contains("url: dahnee.us"));
        assert!(summary.contains("audience: coffe"));
        assert!(summary.contains("clientId: 7W9s2lZonVSCEPm2Z4fy3UvP7bqgWH3A"));
        assert!(summary.contains("callbackURL: http://localhost:8100"));
    }
}

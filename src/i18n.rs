// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持西班牙语（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use std::sync::Once;

/// 缺省语言
pub const DEFAULT_LOCALE: &str = "es";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];

static DEFAULT_LOCALE_INIT: Once = Once::new();

/// 应用缺省语言（进程内只生效一次）
///
/// rust-i18n 启动时的当前语言为 "en"，fallback 只作用于缺失的 key；
/// 之后调用 set_locale 设置的语言不会被覆盖
pub fn init() {
    DEFAULT_LOCALE_INIT.call_once(|| set_locale(DEFAULT_LOCALE));
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"es" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use equipment_proposal::i18n::t;
/// let msg = t("proposal.all_satisfied");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use equipment_proposal::i18n::t_with_args;
/// let msg = t_with_args("proposal.request_not_found", &[("id", "42")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

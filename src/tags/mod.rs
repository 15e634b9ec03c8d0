//! Tiered keyword tag classifier
//!
//! Tags answer "what was this session about" before "what was it written in":
//! task-type categories are consulted first, then domain areas, then technologies.
//! A tier is only consulted while the tag budget is unmet, and the task tier is
//! capped at [`TASK_TIER_CAP`] so domain or technology tags still fit.

/// Maximum number of task-type tags per session
pub const TASK_TIER_CAP: usize = 2;

/// A tag with the keywords that trigger it
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub tag: &'static str,
    /// Matched anywhere in the text
    pub keywords: &'static [&'static str],
    /// Matched only as a whole ASCII word ("pr" but not "prompt")
    pub words: &'static [&'static str],
}

/// Priority bucket of categories
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    /// Tags this tier may contribute at most (`None` = bounded by the budget only)
    pub cap: Option<usize>,
    pub categories: &'static [Category],
}

const TASK_CATEGORIES: &[Category] = &[
    Category::new("bug-fix", &["fix", "bug", "error", "错误", "报错", "修复", "解决", "异常", "失败"]),
    Category::new("feature", &["feature", "implement", "新增", "添加", "开发", "实现", "创建", "功能"]),
    Category::new("refactor", &["refactor", "重构", "优化", "改进", "整理", "清理"]),
    Category::new("debug", &["debug", "调试", "排查", "定位", "问题", "排错"]),
    Category::new("deploy", &["deploy", "部署", "发布", "上线", "production", "线上"]),
    Category::new("config", &["config", "配置", "设置", "环境", "env", "setting"]),
    Category::new("testing", &["test", "测试", "jest", "vitest", "单元测试", "e2e"]),
    Category::new("docs", &["doc", "文档", "readme", "注释", "说明", "document"]),
    Category::new("analysis", &["分析", "analysis", "研究", "调研", "了解", "理解"]),
    Category::new("design", &["设计", "design", "架构", "方案", "规划", "architecture"]),
    Category::new("commit", &["commit", "提交", "push", "pull request", "merge"]).with_words(&["pr"]),
    Category::new("review", &["review", "审查", "检查", "code review"]),
];

const DOMAIN_CATEGORIES: &[Category] = &[
    Category::new("api", &["api", "接口", "endpoint", "路由", "route", "rest"]),
    Category::new("database", &["database", "db", "sql", "mysql", "postgresql", "数据库"]),
    Category::new("auth", &["auth", "login", "登录", "认证", "授权", "权限", "token"]),
    Category::new("cache", &["cache", "redis", "缓存", "ioredis"]),
    Category::new("ui", &["ui", "界面", "组件", "样式", "css", "交互", "页面"]),
    Category::new("performance", &["performance", "性能", "优化", "加速", "慢"]),
    Category::new("hooks", &["hook", "钩子", "mcp", "pre-commit", "post-tool"]),
];

const TECH_CATEGORIES: &[Category] = &[
    Category::new("react", &["react", "jsx", "tsx", "usestate", "useeffect", "component"]),
    Category::new("vue", &["vue", "vuex", "pinia"]),
    Category::new("nextjs", &["next.js", "nextjs", "app router"]),
    Category::new("python", &["python", ".py", "pip"]),
    Category::new("java", &["java", "spring", "maven"]),
    Category::new("docker", &["docker", "container", "容器", "镜像"]),
    Category::new("git", &["git", "branch", "仓库"]),
];

/// Tiers in priority order
pub const TIERS: &[Tier] = &[
    Tier { cap: Some(TASK_TIER_CAP), categories: TASK_CATEGORIES },
    Tier { cap: None, categories: DOMAIN_CATEGORIES },
    Tier { cap: None, categories: TECH_CATEGORIES },
];

impl Category {
    pub const fn new(tag: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { tag, keywords, words: &[] }
    }

    pub const fn with_words(self, words: &'static [&'static str]) -> Self {
        Self { words, ..self }
    }

    /// Case-insensitive keyword hit against already-lowercased text
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(&keyword.to_lowercase()))
            || (!self.words.is_empty()
                && lowered
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .any(|token| self.words.iter().any(|word| word.eq_ignore_ascii_case(token))))
    }
}

impl Tier {
    /// Tags from this tier for the given text, appended to `tags` until the budget is met
    fn classify_into(&self, lowered: &str, tags: &mut Vec<String>, max_tags: usize) {
        let mut taken = 0;
        for category in self.categories {
            if tags.len() >= max_tags || self.cap.is_some_and(|cap| taken >= cap) {
                break;
            }
            if category.matches(lowered) && !tags.iter().any(|t| t == category.tag) {
                tags.push(category.tag.to_string());
                taken += 1;
            }
        }
    }
}

/// Classify text with the default tiers
pub fn generate_tags(content: &str, max_tags: usize) -> Vec<String> {
    classify(content, TIERS, max_tags)
}

/// Classify text against the given tiers, in order
pub fn classify(content: &str, tiers: &[Tier], max_tags: usize) -> Vec<String> {
    let lowered = content.to_lowercase();
    let mut tags = Vec::with_capacity(max_tags);

    for tier in tiers {
        if tags.len() >= max_tags {
            break;
        }
        tier.classify_into(&lowered, &mut tags, max_tags);
    }

    tags
}

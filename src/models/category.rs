/// 题目类别枚举
///
/// VQAR = Verbal / Quantitative / Analytical / Reasoning（选择题测验），
/// Coding = 编程题链接列表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Vqar,
    Coding,
}

/// 全部合法类别
pub const ALL_CATEGORIES: [Category; 2] = [Category::Vqar, Category::Coding];

impl Category {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Category::Vqar => "VQAR",
            Category::Coding => "Coding",
        }
    }

    /// 界面展示用标签
    pub fn label(self) -> &'static str {
        match self {
            Category::Vqar => "VQAR (Aptitude)",
            Category::Coding => "Coding",
        }
    }

    /// 从字符串解析类别（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "VQAR" => Some(Category::Vqar),
            "Coding" => Some(Category::Coding),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

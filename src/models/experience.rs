/// 经验层级枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Experience {
    Fresher,
    Mid,
    Senior,
}

/// 全部合法经验层级
pub const ALL_EXPERIENCE: [Experience; 3] =
    [Experience::Fresher, Experience::Mid, Experience::Senior];

impl Experience {
    /// 获取标准名称（校验与查询串都使用该值）
    pub fn name(self) -> &'static str {
        match self {
            Experience::Fresher => "fresher",
            Experience::Mid => "mid",
            Experience::Senior => "senior",
        }
    }

    /// 界面展示用标签
    pub fn label(self) -> &'static str {
        match self {
            Experience::Fresher => "Fresher (0-2 years)",
            Experience::Mid => "Mid (2-5 years)",
            Experience::Senior => "Senior (5+ years)",
        }
    }

    /// 从字符串解析经验层级（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fresher" => Some(Experience::Fresher),
            "mid" => Some(Experience::Mid),
            "senior" => Some(Experience::Senior),
            _ => None,
        }
    }

    /// 出题提示词中的难度描述
    pub fn difficulty_label(self) -> &'static str {
        match self {
            Experience::Fresher => "beginner to intermediate level",
            Experience::Mid => "intermediate to advanced level",
            Experience::Senior => "advanced level with complex problem-solving",
        }
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for exp in ALL_EXPERIENCE {
            assert_eq!(Experience::from_str(exp.name()), Some(exp));
        }
        assert_eq!(Experience::from_str("expert"), None);
    }
}

use crate::models::experience::Experience;

/// 目标公司枚举
///
/// 输入校验只接受这 8 家公司，未知公司是硬性校验错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Company {
    Amazon,
    Google,
    Microsoft,
    Tcs,
    Infosys,
    Wipro,
    Accenture,
    Cognizant,
}

/// 全部合法公司，按界面展示顺序排列
pub const ALL_COMPANIES: [Company; 8] = [
    Company::Amazon,
    Company::Google,
    Company::Microsoft,
    Company::Tcs,
    Company::Infosys,
    Company::Wipro,
    Company::Accenture,
    Company::Cognizant,
];

impl Company {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Company::Amazon => "Amazon",
            Company::Google => "Google",
            Company::Microsoft => "Microsoft",
            Company::Tcs => "TCS",
            Company::Infosys => "Infosys",
            Company::Wipro => "Wipro",
            Company::Accenture => "Accenture",
            Company::Cognizant => "Cognizant",
        }
    }

    /// 兜底内容表里使用的小写键名
    pub fn table_key(self) -> &'static str {
        match self {
            Company::Amazon => "amazon",
            Company::Google => "google",
            Company::Microsoft => "microsoft",
            Company::Tcs => "tcs",
            Company::Infosys => "infosys",
            Company::Wipro => "wipro",
            Company::Accenture => "accenture",
            Company::Cognizant => "cognizant",
        }
    }

    /// 从字符串解析公司（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Amazon" => Some(Company::Amazon),
            "Google" => Some(Company::Google),
            "Microsoft" => Some(Company::Microsoft),
            "TCS" => Some(Company::Tcs),
            "Infosys" => Some(Company::Infosys),
            "Wipro" => Some(Company::Wipro),
            "Accenture" => Some(Company::Accenture),
            "Cognizant" => Some(Company::Cognizant),
            _ => None,
        }
    }

    /// VQAR 出题提示词中的公司侧重领域描述
    pub fn focus_area(self) -> &'static str {
        match self {
            Company::Amazon => {
                "logical reasoning, data interpretation, and analytical thinking with e-commerce scenarios"
            }
            Company::Google => {
                "mathematical reasoning, pattern recognition, and analytical problems with tech scenarios"
            }
            Company::Microsoft => {
                "logical puzzles, quantitative analysis, and problem-solving with software scenarios"
            }
            Company::Tcs => "basic quantitative aptitude, logical reasoning, and verbal ability",
            Company::Infosys => {
                "mathematical reasoning, logical sequences, and English comprehension"
            }
            Company::Wipro => "quantitative aptitude, logical reasoning, and verbal reasoning",
            Company::Accenture => "cognitive abilities, numerical reasoning, and abstract thinking",
            Company::Cognizant => {
                "quantitative analysis, logical reasoning, and English language skills"
            }
        }
    }

    /// 编程题搜索使用的题库站点
    ///
    /// 产品公司主要考 leetcode 风格题，服务公司主要考 geeksforgeeks 风格题。
    pub fn archive_site(self) -> &'static str {
        match self {
            Company::Amazon | Company::Google | Company::Microsoft => "leetcode.com",
            _ => "geeksforgeeks.org",
        }
    }

    /// 构造编程题搜索查询串
    pub fn search_query(self, experience: Experience) -> String {
        format!(
            "site:{} {} coding interview questions {} level",
            self.archive_site(),
            self.name(),
            experience.name()
        )
    }

    /// 落地页展示的备考建议
    pub fn tip(self) -> &'static str {
        match self {
            Company::Amazon => "Focus on Leadership Principles, system design, and coding efficiency",
            Company::Google => "Emphasize algorithms, data structures, and analytical thinking",
            Company::Microsoft => "Practice problem-solving, coding, and behavioral questions",
            Company::Tcs => "Prepare for aptitude, technical MCQs, and basic programming",
            Company::Infosys => "Focus on logical reasoning, basic programming, and communication",
            Company::Wipro => "Practice quantitative aptitude, verbal ability, and coding",
            Company::Accenture => "Prepare for cognitive abilities, technical skills, and communication",
            Company::Cognizant => "Focus on programming logic, aptitude, and English comprehension",
        }
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_all_eight() {
        for company in ALL_COMPANIES {
            assert_eq!(Company::from_str(company.name()), Some(company));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(Company::from_str("Oracle"), None);
        assert_eq!(Company::from_str("amazon"), None);
    }

    #[test]
    fn test_search_query_uses_archive_site() {
        let q = Company::Tcs.search_query(Experience::Fresher);
        assert!(q.contains("geeksforgeeks.org"));
        assert!(q.contains("TCS"));
        assert!(q.contains("fresher"));

        let q = Company::Google.search_query(Experience::Senior);
        assert!(q.contains("leetcode.com"));
    }
}

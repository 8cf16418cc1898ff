//! 题目关键词解析服务
//!
//! 对自由文本的题目描述做子串匹配：关键词表 → 题库页面 slug，
//! 另外提供概念标签抽取和难度推断，供题目列表页展示使用。

use phf::phf_map;

/// 题目文本关键词 → leetcode 题目 slug
static PROBLEM_SLUGS: phf::Map<&'static str, &'static str> = phf_map! {
    // 数组与字符串
    "two sum" => "two-sum",
    "array sum" => "two-sum",
    "pair sum" => "two-sum",
    "add two numbers" => "add-two-numbers",
    "longest substring" => "longest-substring-without-repeating-characters",
    "substring" => "longest-substring-without-repeating-characters",
    "median two sorted arrays" => "median-of-two-sorted-arrays",
    "median" => "median-of-two-sorted-arrays",
    "reverse string" => "reverse-string",
    "string reverse" => "reverse-string",
    "palindrome" => "valid-palindrome",
    "palindromic" => "valid-palindrome",
    "anagram" => "valid-anagram",
    "anagrams" => "group-anagrams",
    "group anagrams" => "group-anagrams",
    "maximum subarray" => "maximum-subarray",
    "max subarray" => "maximum-subarray",
    "kadane" => "maximum-subarray",
    "product except self" => "product-of-array-except-self",
    "product array" => "product-of-array-except-self",
    "container water" => "container-with-most-water",
    "water container" => "container-with-most-water",
    "3sum" => "3sum",
    "three sum" => "3sum",
    "trapping rain water" => "trapping-rain-water",
    "rain water" => "trapping-rain-water",
    // 链表
    "reverse linked list" => "reverse-linked-list",
    "linked list reverse" => "reverse-linked-list",
    "merge two sorted lists" => "merge-two-sorted-lists",
    "merge sorted" => "merge-two-sorted-lists",
    "linked list cycle" => "linked-list-cycle",
    "cycle detection" => "linked-list-cycle",
    "remove nth node" => "remove-nth-node-from-end-of-list",
    "nth node" => "remove-nth-node-from-end-of-list",
    "intersection two linked lists" => "intersection-of-two-linked-lists",
    "linked list intersection" => "intersection-of-two-linked-lists",
    // 二叉树
    "binary tree inorder" => "binary-tree-inorder-traversal",
    "inorder traversal" => "binary-tree-inorder-traversal",
    "binary tree preorder" => "binary-tree-preorder-traversal",
    "preorder traversal" => "binary-tree-preorder-traversal",
    "binary tree postorder" => "binary-tree-postorder-traversal",
    "postorder traversal" => "binary-tree-postorder-traversal",
    "maximum depth" => "maximum-depth-of-binary-tree",
    "tree depth" => "maximum-depth-of-binary-tree",
    "validate bst" => "validate-binary-search-tree",
    "binary search tree" => "validate-binary-search-tree",
    "symmetric tree" => "symmetric-tree",
    "tree symmetric" => "symmetric-tree",
    "binary tree level order" => "binary-tree-level-order-traversal",
    "level order" => "binary-tree-level-order-traversal",
    "path sum" => "path-sum",
    "tree path" => "path-sum",
    "lowest common ancestor" => "lowest-common-ancestor-of-a-binary-tree",
    "lca" => "lowest-common-ancestor-of-a-binary-tree",
    // 动态规划
    "climbing stairs" => "climbing-stairs",
    "stairs" => "climbing-stairs",
    "fibonacci" => "fibonacci-number",
    "fib" => "fibonacci-number",
    "coin change" => "coin-change",
    "coins" => "coin-change",
    "longest increasing subsequence" => "longest-increasing-subsequence",
    "lis" => "longest-increasing-subsequence",
    "edit distance" => "edit-distance",
    "levenshtein" => "edit-distance",
    "house robber" => "house-robber",
    "robber" => "house-robber",
    "knapsack" => "partition-equal-subset-sum",
    "0/1 knapsack" => "partition-equal-subset-sum",
    "subset sum" => "partition-equal-subset-sum",
    // 图
    "number of islands" => "number-of-islands",
    "islands" => "number-of-islands",
    "course schedule" => "course-schedule",
    "topological sort" => "course-schedule",
    "clone graph" => "clone-graph",
    "graph clone" => "clone-graph",
    "word ladder" => "word-ladder",
    "ladder" => "word-ladder",
    "network delay time" => "network-delay-time",
    "shortest path" => "network-delay-time",
    // 排序与查找
    "merge sort" => "sort-an-array",
    "mergesort" => "sort-an-array",
    "quick sort" => "sort-an-array",
    "quicksort" => "sort-an-array",
    "heap sort" => "sort-an-array",
    "binary search" => "binary-search",
    "search" => "binary-search",
    "search rotated array" => "search-in-rotated-sorted-array",
    "rotated array" => "search-in-rotated-sorted-array",
    "find peak element" => "find-peak-element",
    "peak element" => "find-peak-element",
    "search 2d matrix" => "search-a-2d-matrix",
    "2d matrix" => "search-a-2d-matrix",
    // 栈与队列
    "valid parentheses" => "valid-parentheses",
    "parentheses" => "valid-parentheses",
    "brackets" => "valid-parentheses",
    "implement queue using stacks" => "implement-queue-using-stacks",
    "queue using stacks" => "implement-queue-using-stacks",
    "implement stack using queues" => "implement-stack-using-queues",
    "stack using queues" => "implement-stack-using-queues",
    "min stack" => "min-stack",
    "minimum stack" => "min-stack",
    "evaluate reverse polish" => "evaluate-reverse-polish-notation",
    "reverse polish" => "evaluate-reverse-polish-notation",
    "rpn" => "evaluate-reverse-polish-notation",
    // 哈希表
    "top k frequent" => "top-k-frequent-elements",
    "k frequent" => "top-k-frequent-elements",
    "longest consecutive" => "longest-consecutive-sequence",
    "consecutive sequence" => "longest-consecutive-sequence",
    // 数学与位运算
    "reverse integer" => "reverse-integer",
    "integer reverse" => "reverse-integer",
    "palindrome number" => "palindrome-number",
    "number palindrome" => "palindrome-number",
    "power of two" => "power-of-two",
    "power 2" => "power-of-two",
    "single number" => "single-number",
    "missing number" => "missing-number",
    "counting bits" => "counting-bits",
    "bit counting" => "counting-bits",
};

/// 概念标签 → 触发关键词
const CONCEPT_KEYWORDS: &[(&str, &[&str])] = &[
    ("Array", &["array", "list", "element", "index", "subarray", "sum", "product"]),
    ("String", &["string", "character", "substring", "palindrome", "anagram", "text"]),
    ("Linked List", &["linked list", "node", "pointer", "next", "cycle", "reverse"]),
    ("Binary Tree", &["tree", "binary", "root", "leaf", "traversal", "inorder", "preorder", "postorder"]),
    ("Graph", &["graph", "vertex", "edge", "connected", "path", "island", "bfs", "dfs"]),
    ("Dynamic Programming", &["dynamic", "dp", "optimal", "subproblem", "fibonacci", "stairs", "coin"]),
    ("Sorting", &["sort", "merge", "quick", "heap", "bubble", "selection", "insertion"]),
    ("Binary Search", &["search", "binary search", "find", "locate", "target", "rotated"]),
    ("Stack", &["stack", "push", "pop", "lifo", "parentheses", "bracket"]),
    ("Queue", &["queue", "enqueue", "dequeue", "fifo", "level order"]),
    ("Hash Table", &["hash", "map", "dictionary", "key-value", "frequency", "count"]),
    ("Two Pointers", &["two pointer", "left", "right", "meet", "fast", "slow"]),
    ("Sliding Window", &["window", "substring", "subarray", "sliding", "maximum", "minimum"]),
    ("Recursion", &["recursive", "recursion", "base case", "divide", "conquer"]),
    ("Backtracking", &["backtrack", "permutation", "combination", "generate", "all possible"]),
    ("Greedy", &["greedy", "optimal", "local", "global", "activity", "interval"]),
    ("Bit Manipulation", &["bit", "xor", "and", "or", "shift", "binary", "power of 2"]),
];

/// 难度推断用的指示词
const HARD_INDICATORS: &[&str] = &[
    "complex",
    "advanced",
    "optimize",
    "minimum time",
    "maximum efficiency",
    "hard",
    "challenging",
    "difficult",
    "expert",
    "o(log n)",
    "divide and conquer",
];

const EASY_INDICATORS: &[&str] = &[
    "simple",
    "basic",
    "easy",
    "straightforward",
    "beginner",
    "introduction",
    "find",
    "check",
    "validate",
    "single pass",
];

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 徽章样式的 CSS class 后缀
    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 根据题目文本找最相关的题库页面链接
///
/// 先在关键词表里打分（关键词越长越优，文本以关键词开头加 10 分），
/// 命中不了再走按类别的兜底链，最后落到题库总目录页。
pub fn resolve_problem_link(problem_text: &str) -> String {
    let text = problem_text.to_lowercase();

    let mut best_match: Option<&str> = None;
    let mut best_score = 0usize;

    for (keyword, slug) in PROBLEM_SLUGS.entries() {
        if text.contains(keyword) {
            let mut score = keyword.len();
            if text.starts_with(keyword) {
                score += 10;
            }
            if score > best_score {
                best_score = score;
                best_match = Some(slug);
            }
        }
    }

    if let Some(slug) = best_match {
        return format!("https://leetcode.com/problems/{}/", slug);
    }

    // 按类别的兜底链
    let category_fallbacks: &[(&[&str], &str)] = &[
        (&["array", "sum", "two"], "two-sum"),
        (&["linked", "list", "node"], "reverse-linked-list"),
        (&["tree", "binary", "traversal"], "binary-tree-inorder-traversal"),
        (&["sort", "merge", "quick", "heap"], "sort-an-array"),
        (&["search", "binary", "find"], "binary-search"),
        (&["string", "substring", "character"], "longest-substring-without-repeating-characters"),
        (&["palindrome", "palindromic"], "valid-palindrome"),
        (&["parenthes", "bracket", "valid"], "valid-parentheses"),
        (&["graph", "island", "connected"], "number-of-islands"),
        (&["dynamic", "dp", "fibonacci", "stairs"], "climbing-stairs"),
        (&["stack", "queue", "push", "pop"], "min-stack"),
        (&["hash", "map", "frequency"], "two-sum"),
    ];

    for (keywords, slug) in category_fallbacks {
        if keywords.iter().any(|k| text.contains(k)) {
            return format!("https://leetcode.com/problems/{}/", slug);
        }
    }

    "https://leetcode.com/problemset/algorithms/".to_string()
}

/// 从题目文本中抽取概念标签
///
/// 没有任何命中时返回 "General Algorithm"。
pub fn extract_concepts(problem_text: &str) -> Vec<&'static str> {
    let text = problem_text.to_lowercase();

    let concepts: Vec<&'static str> = CONCEPT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(concept, _)| *concept)
        .collect();

    if concepts.is_empty() {
        vec!["General Algorithm"]
    } else {
        concepts
    }
}

/// 根据指示词推断题目难度
pub fn difficulty_from_text(problem_text: &str) -> Difficulty {
    let text = problem_text.to_lowercase();

    let hard_score = HARD_INDICATORS.iter().filter(|i| text.contains(**i)).count();
    let easy_score = EASY_INDICATORS.iter().filter(|i| text.contains(**i)).count();

    if hard_score > easy_score && hard_score > 0 {
        Difficulty::Hard
    } else if easy_score > 0 {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_keyword() {
        let url = resolve_problem_link("Two Sum: find indices adding to target");
        assert_eq!(url, "https://leetcode.com/problems/two-sum/");
    }

    #[test]
    fn test_resolve_prefers_longer_keyword() {
        // "trapping rain water" 应压过泛化的 "search" 类命中
        let url = resolve_problem_link("Trapping rain water between bars");
        assert_eq!(url, "https://leetcode.com/problems/trapping-rain-water/");
    }

    #[test]
    fn test_resolve_category_fallback() {
        let url = resolve_problem_link("reverse the given singly linked node chain");
        assert_eq!(url, "https://leetcode.com/problems/reverse-linked-list/");
    }

    #[test]
    fn test_resolve_default_fallback() {
        let url = resolve_problem_link("quantum entanglement puzzle");
        assert_eq!(url, "https://leetcode.com/problemset/algorithms/");
    }

    #[test]
    fn test_extract_concepts_matches_keywords() {
        let concepts = extract_concepts("Given an array, find the maximum subarray sum");
        assert!(concepts.contains(&"Array"));
    }

    #[test]
    fn test_extract_concepts_default() {
        assert_eq!(extract_concepts("xyzzy"), vec!["General Algorithm"]);
    }

    #[test]
    fn test_difficulty_scoring() {
        assert_eq!(
            difficulty_from_text("A simple check for beginners"),
            Difficulty::Easy
        );
        assert_eq!(
            difficulty_from_text("Optimize this challenging divide and conquer problem"),
            Difficulty::Hard
        );
        assert_eq!(difficulty_from_text("Reverse a number"), Difficulty::Medium);
    }
}

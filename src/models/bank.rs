use crate::models::question::{Question, QuestionType};
use std::collections::HashSet;

/// 题库
///
/// 启动时加载一次，之后只读。
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// 空题库（加载失败时使用）
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// 题型筛选（当前勾选的题型）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    selected: HashSet<QuestionType>,
}

impl TypeFilter {
    /// 勾选全部已知题型
    pub fn all() -> Self {
        Self::from_types(QuestionType::KNOWN)
    }

    /// 不勾选任何题型
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_types(types: impl IntoIterator<Item = QuestionType>) -> Self {
        Self {
            selected: types.into_iter().collect(),
        }
    }

    /// 勾选或取消勾选某个题型
    pub fn set(&mut self, question_type: QuestionType, enabled: bool) {
        if enabled {
            self.selected.insert(question_type);
        } else {
            self.selected.remove(&question_type);
        }
    }

    pub fn contains(&self, question_type: &QuestionType) -> bool {
        self.selected.contains(question_type)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

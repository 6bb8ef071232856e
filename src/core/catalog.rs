//! Course catalog, lesson progress and the course-creation draft.
//!
//! There is no course API yet, so the catalog is built from static data.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category filter value that matches every course.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[default]
    #[display("Beginner")]
    Beginner,
    #[display("Intermediate")]
    Intermediate,
    #[display("Advanced")]
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    /// Form value, as used in `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    #[default]
    #[display("video")]
    Video,
    #[display("article")]
    Article,
    #[display("quiz")]
    Quiz,
    #[display("project")]
    Project,
}

impl LessonKind {
    pub const ALL: [LessonKind; 4] = [
        LessonKind::Video,
        LessonKind::Article,
        LessonKind::Quiz,
        LessonKind::Project,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub kind: LessonKind,
    pub completed: bool,
}

/// Lessons before and after the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonNeighbors<'a> {
    pub previous: Option<&'a str>,
    pub next: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub instructor_role: String,
    pub duration: String,
    pub level: CourseLevel,
    pub category: String,
    pub rating: f32,
    pub students: u32,
    pub price: f64,
    pub tags: Vec<String>,
    pub lessons: Vec<Lesson>,
}

impl Course {
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == lesson_id)
    }

    /// `None` when the lesson is not part of this course.
    pub fn neighbors(&self, lesson_id: &str) -> Option<LessonNeighbors<'_>> {
        let index = self.lessons.iter().position(|lesson| lesson.id == lesson_id)?;
        Some(LessonNeighbors {
            previous: index
                .checked_sub(1)
                .and_then(|prev| self.lessons.get(prev))
                .map(|lesson| lesson.id.as_str()),
            next: self.lessons.get(index + 1).map(|lesson| lesson.id.as_str()),
        })
    }

    /// Marks a lesson complete. Returns false for an unknown lesson.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        match self.lessons.iter_mut().find(|lesson| lesson.id == lesson_id) {
            Some(lesson) => {
                lesson.completed = true;
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|lesson| lesson.completed).count()
    }

    /// Completed share of lessons, rounded, in 0..=100.
    pub fn progress_percent(&self) -> u8 {
        if self.lessons.is_empty() {
            return 0;
        }
        clamp_progress(self.completed_count() as f64 * 100.0 / self.lessons.len() as f64)
    }

    /// Where "continue learning" goes: the first unfinished lesson, or the
    /// first lesson once everything is done.
    pub fn resume_lesson(&self) -> Option<&Lesson> {
        self.lessons
            .iter()
            .find(|lesson| !lesson.completed)
            .or_else(|| self.lessons.first())
    }
}

/// Clamps a progress value to 0..=100 and rounds it. NaN counts as 0.
pub fn clamp_progress(progress: f64) -> u8 {
    if progress.is_nan() {
        return 0;
    }
    progress.clamp(0.0, 100.0).round() as u8
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mock()
    }
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    pub fn find_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.id == course_id)
    }

    /// `"All"` first, then each category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for course in &self.courses {
            if !categories.contains(&course.category.as_str()) {
                categories.push(&course.category);
            }
        }
        categories
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|course| category == ALL_CATEGORIES || course.category == category)
            .collect()
    }

    /// Static catalog shown until a course API exists.
    pub fn mock() -> Self {
        Self::new(vec![
            course(
                "1",
                "Advanced React & Redux: Build Enterprise Applications",
                "Master advanced React techniques and architectural patterns to build scalable and maintainable applications.",
                ("Sarah Johnson", "Senior Frontend Engineer"),
                ("24 hours", CourseLevel::Intermediate, "Web Development"),
                (4.9, 45892, 89.99),
                &["React", "Redux", "JavaScript"],
                vec![
                    lesson("1", "Course Introduction and Overview", "12 min", LessonKind::Video, true),
                    lesson("2", "Component Composition Patterns", "45 min", LessonKind::Video, true),
                    lesson("3", "Advanced Hook Patterns", "58 min", LessonKind::Video, false),
                    lesson("4", "Custom Hook Development", "52 min", LessonKind::Video, false),
                    lesson("5", "Context API and State Management", "63 min", LessonKind::Video, false),
                    lesson("6", "Performance Optimization Techniques", "70 min", LessonKind::Video, false),
                    lesson("7", "Advanced Testing Strategies", "55 min", LessonKind::Video, false),
                    lesson("8", "Final Project: Building a Complex Application", "120 min", LessonKind::Project, false),
                ],
            ),
            course(
                "2",
                "Machine Learning & Deep Neural Networks: The Complete Guide",
                "Build and train neural networks from first principles to production models.",
                ("Michael Chen", "AI Research Scientist"),
                ("18 hours", CourseLevel::Beginner, "AI & Machine Learning"),
                (4.8, 32451, 79.99),
                &["Python", "TensorFlow", "Neural Networks"],
                vec![
                    lesson("1", "What Is Machine Learning?", "20 min", LessonKind::Video, false),
                    lesson("2", "Linear Models", "35 min", LessonKind::Article, false),
                    lesson("3", "Checkpoint Quiz", "10 min", LessonKind::Quiz, false),
                ],
            ),
            course(
                "3",
                "AWS Solutions Architect Professional Certification",
                "Design resilient, cost-aware architectures on AWS and pass the professional exam.",
                ("David Wilson", "Cloud Architect"),
                ("32 hours", CourseLevel::Advanced, "Cloud Computing"),
                (4.9, 28743, 94.99),
                &["AWS", "Cloud", "DevOps"],
                vec![
                    lesson("1", "Exam Overview", "15 min", LessonKind::Video, false),
                    lesson("2", "Multi-Account Strategy", "50 min", LessonKind::Video, false),
                ],
            ),
            course(
                "4",
                "iOS 18 App Development: SwiftUI Masterclass",
                "Ship modern iOS apps with SwiftUI, from layout basics to App Store release.",
                ("Emma Davis", "iOS Developer"),
                ("20 hours", CourseLevel::Intermediate, "Mobile Development"),
                (4.7, 18965, 84.99),
                &["Swift", "iOS", "SwiftUI"],
                vec![
                    lesson("1", "SwiftUI Fundamentals", "40 min", LessonKind::Video, false),
                    lesson("2", "State and Data Flow", "45 min", LessonKind::Article, false),
                ],
            ),
        ])
    }
}

fn lesson(id: &str, title: &str, duration: &str, kind: LessonKind, completed: bool) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        kind,
        completed,
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    description: &str,
    (instructor, instructor_role): (&str, &str),
    (duration, level, category): (&str, CourseLevel, &str),
    (rating, students, price): (f32, u32, f64),
    tags: &[&str],
    lessons: Vec<Lesson>,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        instructor: instructor.to_string(),
        instructor_role: instructor_role.to_string(),
        duration: duration.to_string(),
        level,
        category: category.to_string(),
        rating,
        students,
        price,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        lessons,
    }
}

/// Problems that keep a course draft from being published.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Course title is required")]
    MissingTitle,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
    #[error("Add at least one section")]
    NoSections,
    #[error("Section {0} needs a title")]
    UntitledSection(usize),
    #[error("Lesson {lesson} in section {section} needs a title")]
    UntitledLesson { section: usize, lesson: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
    pub id: Uuid,
    pub title: String,
    pub kind: LessonKind,
    pub content: String,
    pub duration: String,
}

impl Default for LessonDraft {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            kind: LessonKind::Video,
            content: String::new(),
            duration: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDraft {
    pub id: Uuid,
    pub title: String,
    pub lessons: Vec<LessonDraft>,
}

impl Default for SectionDraft {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            lessons: Vec::new(),
        }
    }
}

/// State of the course-creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    /// Raw input; empty means free.
    pub price: String,
    pub category: String,
    pub level: CourseLevel,
    pub prerequisites: Vec<String>,
    pub sections: Vec<SectionDraft>,
}

impl CourseDraft {
    pub fn add_section(&mut self) -> Uuid {
        let section = SectionDraft::default();
        let id = section.id;
        self.sections.push(section);
        id
    }

    pub fn remove_section(&mut self, section_id: Uuid) -> bool {
        let before = self.sections.len();
        self.sections.retain(|section| section.id != section_id);
        self.sections.len() != before
    }

    /// Appends an empty video lesson. `None` for an unknown section.
    pub fn add_lesson(&mut self, section_id: Uuid) -> Option<Uuid> {
        let section = self.section_mut(section_id)?;
        let lesson = LessonDraft::default();
        let id = lesson.id;
        section.lessons.push(lesson);
        Some(id)
    }

    pub fn remove_lesson(&mut self, section_id: Uuid, lesson_id: Uuid) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        let before = section.lessons.len();
        section.lessons.retain(|lesson| lesson.id != lesson_id);
        section.lessons.len() != before
    }

    pub fn section_mut(&mut self, section_id: Uuid) -> Option<&mut SectionDraft> {
        self.sections.iter_mut().find(|section| section.id == section_id)
    }

    /// Adds a trimmed, non-duplicate prerequisite.
    pub fn add_prerequisite(&mut self, prerequisite: &str) -> bool {
        let prerequisite = prerequisite.trim();
        if prerequisite.is_empty() || self.prerequisites.iter().any(|p| p == prerequisite) {
            return false;
        }
        self.prerequisites.push(prerequisite.to_string());
        true
    }

    pub fn remove_prerequisite(&mut self, index: usize) {
        if index < self.prerequisites.len() {
            self.prerequisites.remove(index);
        }
    }

    /// Parsed price: `Ok(None)` when left empty.
    pub fn parsed_price(&self) -> Result<Option<f64>, DraftError> {
        let price = self.price.trim();
        if price.is_empty() {
            return Ok(None);
        }
        match price.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
            _ => Err(DraftError::InvalidPrice),
        }
    }

    pub fn total_lessons(&self) -> usize {
        self.sections.iter().map(|section| section.lessons.len()).sum()
    }

    /// Every problem with the draft, sections and lessons numbered from 1.
    pub fn validate(&self) -> Result<(), Vec<DraftError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(DraftError::MissingTitle);
        }
        if let Err(err) = self.parsed_price() {
            errors.push(err);
        }
        if self.sections.is_empty() {
            errors.push(DraftError::NoSections);
        }

        for (s, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                errors.push(DraftError::UntitledSection(s + 1));
            }
            for (l, lesson) in section.lessons.iter().enumerate() {
                if lesson.title.trim().is_empty() {
                    errors.push(DraftError::UntitledLesson {
                        section: s + 1,
                        lesson: l + 1,
                    });
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

//! The academy dataset: fixed collections seeded once at startup, plus the
//! derived projections the dashboards read. Nothing here mutates after
//! `AcademyData::seed()` returns.

use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::models::*;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("user {user} references unknown course {course}")]
    UnknownCourse { user: String, course: String },
    #[error("user {user} references unknown badge {badge}")]
    UnknownBadge { user: String, badge: String },
    #[error("user {user} progress for {course} is {value}, outside 0..=100")]
    ProgressOutOfRange {
        user: String,
        course: String,
        value: u8,
    },
    #[error("user {user} has {course} both enrolled and completed")]
    EnrolledAndCompleted { user: String, course: String },
    #[error("course {course} completion rate {value} is outside 0..=100")]
    BadCompletionRate { course: String, value: u8 },
}

pub struct AcademyData {
    users: Vec<User>,
    courses: Vec<Course>,
    pending_reviews: Vec<PendingReview>,
    badges: Vec<Badge>,
    certificates: Vec<Certificate>,
    study_stats: Vec<StudyStat>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

impl AcademyData {
    /// Builds the fixed collections and checks the referential invariants.
    /// Called once at startup; the seed is the single canonical copy of the
    /// sample data.
    pub fn seed() -> Result<Self, DatasetError> {
        let courses = vec![
            Course {
                id: "c1".into(),
                title: "Asistente Virtual Profesional".into(),
                description:
                    "Domina las habilidades esenciales para ser un asistente virtual de clase mundial."
                        .into(),
                duration: "40 horas".into(),
                modules: 12,
                enrolled_count: 85,
                completion_rate: 72,
            },
            Course {
                id: "c2".into(),
                title: "Gestión de Redes Sociales".into(),
                description:
                    "Aprende a crear y gestionar contenido para redes sociales profesionalmente."
                        .into(),
                duration: "30 horas".into(),
                modules: 8,
                enrolled_count: 62,
                completion_rate: 65,
            },
            Course {
                id: "c3".into(),
                title: "Customer Success".into(),
                description: "Estrategias para garantizar el éxito y satisfacción de los clientes."
                    .into(),
                duration: "25 horas".into(),
                modules: 6,
                enrolled_count: 48,
                completion_rate: 58,
            },
            Course {
                id: "c4".into(),
                title: "Herramientas Digitales".into(),
                description: "Domina las herramientas esenciales del trabajo remoto moderno.".into(),
                duration: "20 horas".into(),
                modules: 10,
                enrolled_count: 95,
                completion_rate: 88,
            },
        ];

        let users = vec![
            User {
                id: "1".into(),
                name: "María García López".into(),
                email: "maria.garcia@lovirtual.com".into(),
                access_code: "LOV-2026-MGL".into(),
                role: Role::Employee,
                enrolled_courses: vec!["c1".into(), "c2".into(), "c3".into()],
                completed_courses: vec!["c4".into()],
                progress: HashMap::from([("c1".into(), 75), ("c2".into(), 30), ("c3".into(), 10)]),
                badges: vec!["b1".into(), "b2".into(), "b3".into()],
                created_at: date(2025, 1, 15),
                is_active: true,
            },
            User {
                id: "2".into(),
                name: "Carlos Rodríguez".into(),
                email: "carlos.rodriguez@lovirtual.com".into(),
                access_code: "LOV-2026-CRD".into(),
                role: Role::Employee,
                enrolled_courses: vec!["c1".into(), "c4".into()],
                completed_courses: vec!["c2".into()],
                progress: HashMap::from([("c1".into(), 45), ("c4".into(), 60)]),
                badges: vec!["b1".into()],
                created_at: date(2025, 2, 1),
                is_active: true,
            },
            User {
                id: "3".into(),
                name: "Ana Martínez".into(),
                email: "ana.martinez@lovirtual.com".into(),
                access_code: "LOV-2026-AMT".into(),
                role: Role::Employee,
                enrolled_courses: vec!["c2".into(), "c3".into()],
                completed_courses: vec![],
                progress: HashMap::from([("c2".into(), 15), ("c3".into(), 5)]),
                badges: vec![],
                created_at: date(2025, 3, 10),
                is_active: true,
            },
            User {
                id: "4".into(),
                name: "Roberto Sánchez".into(),
                email: "roberto.sanchez@lovirtual.com".into(),
                access_code: "LOV-2026-RSZ".into(),
                role: Role::Employee,
                enrolled_courses: vec!["c1".into()],
                completed_courses: vec!["c3".into(), "c4".into()],
                progress: HashMap::from([("c1".into(), 90)]),
                badges: vec!["b1".into(), "b2".into(), "b3".into(), "b4".into()],
                created_at: date(2024, 12, 5),
                is_active: true,
            },
            User {
                id: "5".into(),
                name: "Laura Fernández".into(),
                email: "laura.fernandez@lovirtual.com".into(),
                access_code: "LOV-2026-LFZ".into(),
                role: Role::Employee,
                enrolled_courses: vec!["c4".into()],
                completed_courses: vec!["c1".into(), "c2".into()],
                progress: HashMap::from([("c4".into(), 50)]),
                badges: vec!["b1".into(), "b2".into()],
                created_at: date(2025, 1, 20),
                is_active: false,
            },
        ];

        let pending_reviews = vec![
            PendingReview {
                id: "r1".into(),
                student_id: "1".into(),
                student_name: "María García López".into(),
                course_id: "c1".into(),
                course_name: "Asistente Virtual Profesional".into(),
                sprint_name: "Sprint 3: Gestión del Tiempo".into(),
                submitted_at: date(2026, 1, 28),
                status: ReviewStatus::Pending,
            },
            PendingReview {
                id: "r2".into(),
                student_id: "2".into(),
                student_name: "Carlos Rodríguez".into(),
                course_id: "c4".into(),
                course_name: "Herramientas Digitales".into(),
                sprint_name: "Sprint 5: Automatización".into(),
                submitted_at: date(2026, 1, 29),
                status: ReviewStatus::Pending,
            },
            PendingReview {
                id: "r3".into(),
                student_id: "4".into(),
                student_name: "Roberto Sánchez".into(),
                course_id: "c1".into(),
                course_name: "Asistente Virtual Profesional".into(),
                sprint_name: "Sprint 8: Comunicación Efectiva".into(),
                submitted_at: date(2026, 1, 30),
                status: ReviewStatus::Pending,
            },
        ];

        let badges = vec![
            Badge {
                id: "b1".into(),
                name: "Primer Paso".into(),
                description: "Completaste tu primer módulo".into(),
                icon: BadgeIcon::Footprints,
                unlocked: true,
            },
            Badge {
                id: "b2".into(),
                name: "Estudiante Dedicado".into(),
                description: "10 horas de estudio".into(),
                icon: BadgeIcon::Clock,
                unlocked: true,
            },
            Badge {
                id: "b3".into(),
                name: "Quiz Master".into(),
                description: "Score perfecto en un quiz".into(),
                icon: BadgeIcon::Trophy,
                unlocked: true,
            },
            Badge {
                id: "b4".into(),
                name: "Graduado".into(),
                description: "Completaste tu primer curso".into(),
                icon: BadgeIcon::GraduationCap,
                unlocked: true,
            },
            Badge {
                id: "b5".into(),
                name: "Explorador".into(),
                description: "Inscrito en 3+ cursos".into(),
                icon: BadgeIcon::Compass,
                unlocked: false,
            },
            Badge {
                id: "b6".into(),
                name: "Maratonista".into(),
                description: "50 horas de estudio".into(),
                icon: BadgeIcon::Flame,
                unlocked: false,
            },
        ];

        let certificates = vec![Certificate {
            id: "cert1".into(),
            course_name: "Herramientas Digitales".into(),
            completed_at: date(2025, 12, 15),
            certificate_url: "#".into(),
        }];

        let study_stats = vec![
            StudyStat { day: "Lun".into(), hours: 2.5, quiz_score: 85 },
            StudyStat { day: "Mar".into(), hours: 1.8, quiz_score: 90 },
            StudyStat { day: "Mié".into(), hours: 3.2, quiz_score: 78 },
            StudyStat { day: "Jue".into(), hours: 2.0, quiz_score: 92 },
            StudyStat { day: "Vie".into(), hours: 1.5, quiz_score: 88 },
            StudyStat { day: "Sáb".into(), hours: 4.0, quiz_score: 95 },
            StudyStat { day: "Dom".into(), hours: 0.5, quiz_score: 80 },
        ];

        let data = Self {
            users,
            courses,
            pending_reviews,
            badges,
            certificates,
            study_stats,
        };
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let course_ids: HashSet<&str> = self.courses.iter().map(|c| c.id.as_str()).collect();
        let badge_ids: HashSet<&str> = self.badges.iter().map(|b| b.id.as_str()).collect();

        for course in &self.courses {
            if course.completion_rate > 100 {
                return Err(DatasetError::BadCompletionRate {
                    course: course.id.clone(),
                    value: course.completion_rate,
                });
            }
        }

        for user in &self.users {
            let completed: HashSet<&str> =
                user.completed_courses.iter().map(String::as_str).collect();

            for id in user.enrolled_courses.iter().chain(&user.completed_courses) {
                if !course_ids.contains(id.as_str()) {
                    return Err(DatasetError::UnknownCourse {
                        user: user.id.clone(),
                        course: id.clone(),
                    });
                }
            }
            for id in &user.enrolled_courses {
                if completed.contains(id.as_str()) {
                    return Err(DatasetError::EnrolledAndCompleted {
                        user: user.id.clone(),
                        course: id.clone(),
                    });
                }
            }
            for (course, &value) in &user.progress {
                if !course_ids.contains(course.as_str()) {
                    return Err(DatasetError::UnknownCourse {
                        user: user.id.clone(),
                        course: course.clone(),
                    });
                }
                if value > 100 {
                    return Err(DatasetError::ProgressOutOfRange {
                        user: user.id.clone(),
                        course: course.clone(),
                        value,
                    });
                }
            }
            for id in &user.badges {
                if !badge_ids.contains(id.as_str()) {
                    return Err(DatasetError::UnknownBadge {
                        user: user.id.clone(),
                        badge: id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    // --- collection accessors, insertion order preserved ---

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn pending_reviews(&self) -> &[PendingReview] {
        &self.pending_reviews
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn study_stats(&self) -> &[StudyStat] {
        &self.study_stats
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // --- derived projections ---

    /// Case-insensitive substring match over name or email. An empty term
    /// matches everything, so the full collection comes back in order.
    pub fn filter_users(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// One row per course, in course-collection order.
    pub fn course_popularity(&self) -> Vec<CoursePopularity> {
        self.courses
            .iter()
            .map(|c| CoursePopularity {
                course: c.title.clone(),
                enrolled_count: c.enrolled_count,
            })
            .collect()
    }

    /// Three fixed categories summing to 100.
    pub fn completion_breakdown(&self) -> Vec<CompletionSlice> {
        vec![
            CompletionSlice {
                label: "Completados".into(),
                value: 45,
                color_token: ColorToken::Primary,
            },
            CompletionSlice {
                label: "En Progreso".into(),
                value: 38,
                color_token: ColorToken::Accent,
            },
            CompletionSlice {
                label: "No Iniciados".into(),
                value: 17,
                color_token: ColorToken::Muted,
            },
        ]
    }

    pub fn kpis(&self) -> DashboardKpis {
        DashboardKpis {
            total_students: 150,
            pending_reviews: 6,
            approved_sprints: 45,
            active_courses: 7,
        }
    }

    /// A user's enrolled courses joined with their completion percentage.
    /// Courses enrolled but without a recorded progress entry read as 0.
    pub fn courses_for(&self, user: &User) -> Vec<CourseProgress> {
        self.courses
            .iter()
            .filter(|c| user.enrolled_courses.contains(&c.id))
            .map(|c| CourseProgress {
                course: c.clone(),
                percent: user.progress.get(&c.id).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Splits the badge catalog by membership in the user's earned set.
    pub fn badge_board(&self, user: &User) -> BadgeBoard {
        let (unlocked, locked) = self
            .badges
            .iter()
            .cloned()
            .partition(|b| user.badges.contains(&b.id));
        BadgeBoard { unlocked, locked }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_satisfies_invariants() {
        let data = AcademyData::seed().expect("seed data validates");
        assert_eq!(data.users().len(), 5);
        assert_eq!(data.courses().len(), 4);
        assert_eq!(data.badges().len(), 6);
        for course in data.courses() {
            assert!(course.completion_rate <= 100);
        }
        for user in data.users() {
            for value in user.progress.values() {
                assert!(*value <= 100);
            }
        }
    }

    #[test]
    fn empty_filter_returns_everyone_in_order() {
        let data = AcademyData::seed().unwrap();
        let all = data.filter_users("");
        assert_eq!(all.len(), data.users().len());
        let ids: Vec<&str> = all.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn filter_is_case_insensitive_over_name_and_email() {
        let data = AcademyData::seed().unwrap();

        // "maria" only appears unaccented in the email address
        let hits = data.filter_users("maria");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "María García López");

        let hits = data.filter_users("SÁNCHEZ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "4");

        assert!(data.filter_users("zzz-no-such-user").is_empty());
    }

    #[test]
    fn completion_breakdown_sums_to_100() {
        let data = AcademyData::seed().unwrap();
        let slices = data.completion_breakdown();
        assert_eq!(slices.len(), 3);
        let total: u32 = slices.iter().map(|s| s.value as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn popularity_follows_course_order() {
        let data = AcademyData::seed().unwrap();
        let rows = data.course_popularity();
        assert_eq!(rows.len(), data.courses().len());
        for (row, course) in rows.iter().zip(data.courses()) {
            assert_eq!(row.course, course.title);
            assert_eq!(row.enrolled_count, course.enrolled_count);
        }
    }

    #[test]
    fn student_projections_join_progress_and_badges() {
        let data = AcademyData::seed().unwrap();
        let maria = data.user("1").unwrap();

        let courses = data.courses_for(maria);
        assert_eq!(courses.len(), 3);
        let c1 = courses.iter().find(|cp| cp.course.id == "c1").unwrap();
        assert_eq!(c1.percent, 75);

        let board = data.badge_board(maria);
        assert_eq!(board.unlocked.len(), 3);
        assert_eq!(board.locked.len(), 3);
        assert!(board.locked.iter().any(|b| b.icon == BadgeIcon::GraduationCap));
    }

    #[test]
    fn unknown_user_lookup_is_none() {
        let data = AcademyData::seed().unwrap();
        assert!(data.user("999").is_none());
    }
}

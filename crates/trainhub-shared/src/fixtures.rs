//! Demo data supplied whole at start up. Read only to everything else

use secrecy::SecretString;

use crate::{
    coursework::{LearningTask, TaskPriority, TestResult, UpcomingTest},
    errors::ConversionError,
    reports::Department,
    roster::{ActivityStatus::*, Trainee},
    uac::{Role, User, UserDirectory, UserInfo},
};

const TOTAL_WEEKS: u8 = 12;

fn avatar_url(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=150&h=150&fit=crop&crop=face")
}

type UserRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Role,
    &'static str,
    &'static [&'static str],
);

/// (id, email, password, name, role, avatar photo, permissions)
const DEMO_USERS: [UserRow; 5] = [
    (
        "1",
        "admin@company.com",
        "admin123",
        "Rupesh",
        Role::Admin,
        "1507003211169-0a1dd7228f2d",
        &["all"],
    ),
    (
        "2",
        "hr@company.com",
        "hr123",
        "Asiya Ashraf",
        Role::Hr,
        "1494790108377-be9c29b29330",
        &["manage_trainees", "view_analytics", "manage_hiring"],
    ),
    (
        "3",
        "facilitator@company.com",
        "facilitator123",
        "Amarathana Shree",
        Role::Facilitator,
        "1573496359142-b8d87734a5a2",
        &["manage_courses", "grade_assignments", "create_tests"],
    ),
    (
        "4",
        "trainee@company.com",
        "trainee123",
        "Priya Sharma",
        Role::Trainee,
        "1438761681033-6461ffad8d80",
        &["view_courses", "take_tests", "submit_assignments"],
    ),
    (
        "5",
        "manager@company.com",
        "manager123",
        "Vikram Patel",
        Role::Manager,
        "1500648767791-00dcc994a43e",
        &["view_analytics", "view_reports", "manage_strategy"],
    ),
];

/// The five demo accounts, one per role
pub fn demo_users() -> Result<UserDirectory, ConversionError> {
    let mut users = Vec::with_capacity(DEMO_USERS.len());
    for (id, email, password, name, role, photo, permissions) in DEMO_USERS {
        let info = UserInfo {
            id: id.to_string().try_into()?,
            email: email.try_into()?,
            name: name.to_string().try_into()?,
            role,
            avatar: avatar_url(photo).into(),
            permissions: permissions.iter().copied().collect(),
        };
        users.push(User::new(info, SecretString::from(password)));
    }
    Ok(users.into())
}

/// The demo trainee roster in enrolment order
pub fn demo_trainees() -> Vec<Trainee> {
    [
        ("t1", "Priya Sharma", "priya.s@trainee.com", "1438761681033-6461ffad8d80", 2, 18, "Full Stack", "React Development", "2 hours ago", 87, Active),
        ("t2", "Arjun Reddy", "arjun.r@trainee.com", "1507003211169-0a1dd7228f2d", 5, 42, "Core Stack", "Python Backend", "1 hour ago", 92, Active),
        ("t3", "Ananya Gupta", "ananya.g@trainee.com", "1494790108377-be9c29b29330", 8, 68, "AI-ML", "Machine Learning", "30 mins ago", 95, Active),
        ("t4", "Rahul Verma", "rahul.v@trainee.com", "1472099645785-5658abf4ff4e", 3, 25, "Full Stack", "Node.js Backend", "4 hours ago", 78, Active),
        ("t5", "Kavitha Nair", "kavitha.n@trainee.com", "1534528741775-53994a69daeb", 10, 85, "Core Stack", "Data Structures", "1 day ago", 88, Active),
        ("t6", "Suresh Kumar", "suresh.k@trainee.com", "1500648767791-00dcc994a43e", 6, 50, "AI-ML", "Deep Learning", "3 hours ago", 82, Active),
        ("t7", "Deepika Menon", "deepika.m@trainee.com", "1544005313-94ddf0286df2", 11, 92, "Full Stack", "React Development", "5 mins ago", 96, Active),
        ("t8", "Aditya Joshi", "aditya.j@trainee.com", "1506794778202-cad84cf45f1d", 4, 33, "Core Stack", "Python Backend", "6 hours ago", 74, Active),
        ("t9", "Sneha Iyer", "sneha.i@trainee.com", "1517841905240-472988babdf9", 7, 58, "AI-ML", "Machine Learning", "2 days ago", 89, Inactive),
        ("t10", "Karthik Rajan", "karthik.r@trainee.com", "1519345182560-3f2917c472ef", 9, 75, "Full Stack", "Node.js Backend", "1 hour ago", 91, Active),
        ("t11", "Meera Krishnan", "meera.k@trainee.com", "1524504388940-b1c1722653e1", 1, 8, "Core Stack", "Data Structures", "Just now", 0, Active),
        ("t12", "Nikhil Desai", "nikhil.d@trainee.com", "1492562080023-ab3db95bfbce", 12, 98, "AI-ML", "Deep Learning", "10 mins ago", 94, Active),
        ("t13", "Lakshmi Venkat", "lakshmi.v@trainee.com", "1502823403499-6ccfcf4fb453", 5, 42, "Full Stack", "React Development", "8 hours ago", 86, Active),
        ("t14", "Sanjay Rao", "sanjay.r@trainee.com", "1463453091185-61582044d556", 6, 50, "Core Stack", "Python Backend", "4 hours ago", 79, Active),
        ("t15", "Divya Pillai", "divya.p@trainee.com", "1508214751196-bcfd4ca60f91", 3, 25, "AI-ML", "Machine Learning", "12 hours ago", 83, Active),
        ("t16", "Rohan Mehta", "rohan.m@trainee.com", "1507591064344-4c6ce005b128", 8, 67, "Full Stack", "Node.js Backend", "2 hours ago", 90, Active),
        ("t17", "Pooja Hegde", "pooja.h@trainee.com", "1531746020798-e6953c6e8e04", 4, 33, "Core Stack", "Data Structures", "1 day ago", 77, Inactive),
        ("t18", "Harish Sundaram", "harish.s@trainee.com", "1522075469751-3a6694fb2f61", 10, 83, "AI-ML", "Deep Learning", "30 mins ago", 93, Active),
        ("t19", "Nandini Bose", "nandini.b@trainee.com", "1529626455594-4ff0802cfb7e", 7, 58, "Full Stack", "React Development", "5 hours ago", 85, Active),
        ("t20", "Prashanth Varma", "prashanth.v@trainee.com", "1504257432389-52343af06ae3", 9, 75, "Core Stack", "Python Backend", "3 hours ago", 88, Active),
        ("t21", "Revathi Srinivasan", "revathi.s@trainee.com", "1488426862026-3ee34a7d66df", 11, 92, "AI-ML", "Machine Learning", "15 mins ago", 97, Active),
    ]
    .into_iter()
    .map(
        |(id, name, email, photo, week, progress, course, track, last_activity, score, status)| {
            Trainee {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                avatar: avatar_url(photo),
                current_week: week,
                total_weeks: TOTAL_WEEKS,
                progress,
                course: course.to_string(),
                track: track.to_string(),
                last_activity: last_activity.to_string(),
                avg_score: score,
                status,
            }
        },
    )
    .collect()
}

/// The signed in trainee's recent test scores, newest first
pub fn demo_test_results() -> Vec<TestResult> {
    [
        ("tr1", "React Fundamentals", 92, "2024-01-10", 3),
        ("tr2", "JavaScript Advanced", 88, "2024-01-05", 7),
        ("tr3", "CSS Layouts", 95, "2024-01-02", 1),
    ]
    .into_iter()
    .map(|(id, test_name, score, date, rank)| TestResult {
        id: id.to_string(),
        test_name: test_name.to_string(),
        score,
        max_score: 100,
        date: date.to_string(),
        rank,
        total_participants: 45,
    })
    .collect()
}

pub fn demo_upcoming_tests() -> Vec<UpcomingTest> {
    [
        ("ut1", "React Hooks Deep Dive", "2024-01-15", "10:00 AM", "90 mins", "MCQ + Coding"),
        ("ut2", "State Management", "2024-01-18", "2:00 PM", "60 mins", "Multiple Choice"),
        ("ut3", "API Integration", "2024-01-22", "11:00 AM", "120 mins", "Practical"),
    ]
    .into_iter()
    .map(|(id, name, date, time, duration, format)| UpcomingTest {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        format: format.to_string(),
    })
    .collect()
}

pub fn demo_tasks() -> Vec<LearningTask> {
    [
        ("task1", "Complete React Router Assignment", "2024-01-12", TaskPriority::High, false),
        ("task2", "Submit Component Library Project", "2024-01-14", TaskPriority::High, false),
        ("task3", "Review Redux Documentation", "2024-01-13", TaskPriority::Medium, true),
        ("task4", "Practice Coding Exercises", "2024-01-15", TaskPriority::Low, false),
    ]
    .into_iter()
    .map(|(id, title, due_date, priority, completed)| LearningTask {
        id: id.to_string(),
        title: title.to_string(),
        due_date: due_date.to_string(),
        priority,
        completed,
    })
    .collect()
}

pub fn demo_departments() -> Vec<Department> {
    [
        ("Engineering", 85, 88, 250_000),
        ("Data Science", 35, 92, 120_000),
        ("Operations", 25, 78, 80_000),
        ("Product", 20, 85, 65_000),
    ]
    .into_iter()
    .map(|(name, trainees, performance, budget)| Department {
        name: name.to_string(),
        trainees,
        performance,
        budget,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;
    use secrecy::SecretString;

    use super::*;

    #[rstest]
    #[case("admin@company.com", "admin123", Role::Admin, "Rupesh")]
    #[case("hr@company.com", "hr123", Role::Hr, "Asiya Ashraf")]
    #[case("facilitator@company.com", "facilitator123", Role::Facilitator, "Amarathana Shree")]
    #[case("trainee@company.com", "trainee123", Role::Trainee, "Priya Sharma")]
    #[case("manager@company.com", "manager123", Role::Manager, "Vikram Patel")]
    fn demo_accounts_log_in(
        #[case] email: &str,
        #[case] password: &str,
        #[case] role: Role,
        #[case] name: &str,
    ) {
        let directory = demo_users().unwrap();
        let user = directory
            .find_by_credentials(email, &SecretString::from(password))
            .unwrap();
        assert_eq!(user.info.role, role);
        assert_eq!(user.info.name.as_ref(), name);
    }

    #[test]
    fn only_admin_has_wildcard() {
        let directory = demo_users().unwrap();
        let wildcard: Vec<Role> = directory
            .iter()
            .filter(|u| u.info.permissions.grants("anything_at_all"))
            .map(|u| u.info.role)
            .collect();
        assert_eq!(wildcard, vec![Role::Admin]);
    }

    #[test]
    fn roster_has_unique_ids() {
        let trainees = demo_trainees();
        assert_eq!(trainees.len(), 21);
        let ids: HashSet<&str> = trainees.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), trainees.len());
        assert_eq!(trainees.iter().filter(|t| t.status == Inactive).count(), 2);
    }
}

//! Builds the tables shown on each role's dashboard

use trainhub_shared::{
    accounts::Account,
    coursework::{LearningTask, TestResult, UpcomingTest},
    reports::Department,
    roster::Trainee,
    table::{Column, TableView},
};

fn percent(value: u8) -> String {
    format!("{value}%")
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Admin user management
pub fn accounts_table(accounts: Vec<Account>) -> TableView<Account> {
    let columns: Vec<Column<Account>> = vec![
        Column::new("name", "User").sortable(),
        Column::new("email", "Email"),
        Column::new("role", "Role")
            .sortable()
            .render_with(|a: &Account| capitalized(<&'static str>::from(a.role))),
        Column::new("status", "Status").render_with(|a: &Account| {
            if a.is_active() { "Active" } else { "Inactive" }.to_string()
        }),
        Column::new("lastLogin", "Last Login"),
    ];
    TableView::new(accounts, columns)
        .searchable(["name", "email"])
        .empty_message("No users found")
}

/// HR trainee overview
pub fn hr_trainees_table(trainees: Vec<Trainee>) -> TableView<Trainee> {
    let columns: Vec<Column<Trainee>> = vec![
        Column::new("name", "Trainee").sortable(),
        Column::new("course", "Course").sortable(),
        Column::new("progress", "Progress")
            .sortable()
            .render_with(|t: &Trainee| percent(t.progress)),
        Column::new("avgScore", "Score")
            .sortable()
            .render_with(|t: &Trainee| percent(t.avg_score)),
        Column::new("status", "Status"),
    ];
    TableView::new(trainees, columns)
        .searchable(["name", "email", "course"])
        .empty_message("No trainees found")
}

/// Facilitator student performance
pub fn facilitator_students_table(trainees: Vec<Trainee>) -> TableView<Trainee> {
    let columns: Vec<Column<Trainee>> = vec![
        Column::new("name", "Student").sortable(),
        Column::new("currentWeek", "Week")
            .sortable()
            .render_with(|t: &Trainee| format!("Week {}", t.current_week)),
        Column::new("progress", "Progress")
            .sortable()
            .render_with(|t: &Trainee| percent(t.progress)),
        Column::new("avgScore", "Avg Score")
            .sortable()
            .render_with(|t: &Trainee| percent(t.avg_score)),
        Column::new("lastActivity", "Last Active"),
    ];
    TableView::new(trainees, columns)
        .searchable(["name", "email"])
        .empty_message("No students found")
}

/// The signed in trainee's recent scores
pub fn test_results_table(results: Vec<TestResult>) -> TableView<TestResult> {
    let columns: Vec<Column<TestResult>> = vec![
        Column::new("testName", "Test").sortable(),
        Column::new("date", "Date").sortable(),
        Column::new("score", "Score")
            .sortable()
            .render_with(|r: &TestResult| percent(r.score)),
        Column::new("rank", "Rank")
            .sortable()
            .render_with(TestResult::rank_label),
    ];
    TableView::new(results, columns)
        .searchable(["testName"])
        .empty_message("No test results yet")
}

pub fn upcoming_tests_table(tests: Vec<UpcomingTest>) -> TableView<UpcomingTest> {
    let columns: Vec<Column<UpcomingTest>> = vec![
        Column::new("name", "Test"),
        Column::new("type", "Type"),
        Column::new("date", "Date"),
        Column::new("time", "Time")
            .render_with(|t: &UpcomingTest| format!("{} • {}", t.time, t.duration)),
    ];
    TableView::new(tests, columns).empty_message("No upcoming tests")
}

pub fn tasks_table(tasks: Vec<LearningTask>) -> TableView<LearningTask> {
    let columns: Vec<Column<LearningTask>> = vec![
        Column::new("completed", "Done")
            .render_with(|t: &LearningTask| if t.completed { "[x]" } else { "[ ]" }.to_string()),
        Column::new("title", "Task"),
        Column::new("dueDate", "Due"),
        Column::new("priority", "Priority"),
    ];
    TableView::new(tasks, columns).empty_message("No tasks")
}

/// Manager view of each department
pub fn departments_table(departments: Vec<Department>) -> TableView<Department> {
    let columns: Vec<Column<Department>> = vec![
        Column::new("name", "Department").sortable(),
        Column::new("trainees", "Trainees").sortable(),
        Column::new("performance", "Performance")
            .sortable()
            .render_with(|d: &Department| percent(d.performance)),
        Column::new("budget", "Budget")
            .sortable()
            .render_with(|d: &Department| format!("${}", d.budget)),
    ];
    TableView::new(departments, columns)
        .searchable(["name"])
        .empty_message("No departments found")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use trainhub_shared::{
        accounts::{account_overview, filter_by_role},
        fixtures::{
            demo_departments, demo_tasks, demo_test_results, demo_trainees, demo_upcoming_tests,
            demo_users,
        },
        table::TableBody,
        uac::Role,
    };

    use super::*;

    fn rows<T: trainhub_shared::table::Record>(table: &TableView<T>) -> Vec<Vec<String>> {
        match table.render().body {
            TableBody::Rows(rows) => rows.into_iter().map(|r| r.cells).collect(),
            TableBody::Empty { .. } => Vec::new(),
        }
    }

    fn accounts(role: Option<Role>) -> Vec<Account> {
        filter_by_role(account_overview(&demo_users().unwrap(), &demo_trainees()), role)
    }

    #[test]
    fn admin_lists_directory_and_trainees_by_name() {
        // Arrange
        let mut table = accounts_table(accounts(None));

        // Act
        assert!(table.activate_column("name"));

        // Assert
        let names: Vec<&str> = table.visible_rows().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Amarathana Shree",
                "Ananya Gupta",
                "Arjun Reddy",
                "Asiya Ashraf",
                "Kavitha Nair",
                "Priya Sharma",
                "Priya Sharma",
                "Rahul Verma",
                "Rupesh",
                "Vikram Patel"
            ]
        );
    }

    #[test]
    fn admin_role_filter_applies_before_search() {
        // Arrange
        let mut table = accounts_table(accounts(Some(Role::Trainee)));

        // Act
        table.set_search_query("priya");

        // Assert
        assert_eq!(
            rows(&table),
            vec![
                vec!["Priya Sharma", "trainee@company.com", "Trainee", "Active", "2024-01-10 14:32"],
                vec!["Priya Sharma", "priya.s@trainee.com", "Trainee", "Active", "2 hours ago"],
            ]
        );
    }

    #[test]
    fn hr_renders_scores_as_percent() {
        // Arrange
        let mut table = hr_trainees_table(demo_trainees());

        // Act
        table.set_search_query("meera");

        // Assert
        assert_eq!(
            rows(&table),
            vec![vec!["Meera Krishnan", "Core Stack", "8%", "0%", "active"]]
        );
    }

    #[rstest]
    #[case::hr_matches_course("ai-ml", 7, 0)]
    #[case::email_in_both("@trainee.com", 21, 21)]
    #[case::track_in_neither("react development", 0, 0)]
    fn search_keys_differ_by_role(
        #[case] query: &str,
        #[case] hr_expected: usize,
        #[case] facilitator_expected: usize,
    ) {
        // Arrange
        let mut hr = hr_trainees_table(demo_trainees());
        let mut facilitator = facilitator_students_table(demo_trainees());

        // Act
        hr.set_search_query(query);
        facilitator.set_search_query(query);

        // Assert
        assert_eq!(hr.visible_rows().len(), hr_expected);
        assert_eq!(facilitator.visible_rows().len(), facilitator_expected);
    }

    #[test]
    fn facilitator_columns() {
        let mut table = facilitator_students_table(demo_trainees());
        table.set_search_query("sneha");
        assert_eq!(
            rows(&table),
            vec![vec!["Sneha Iyer", "Week 7", "58%", "89%", "2 days ago"]]
        );
    }

    #[test]
    fn trainee_sees_own_results_best_first() {
        // Arrange
        let mut table = test_results_table(demo_test_results());

        // Act
        assert!(table.activate_column("score"));
        assert!(table.activate_column("score"));

        // Assert
        assert_eq!(
            rows(&table),
            vec![
                vec!["CSS Layouts", "2024-01-02", "95%", "Rank #1 of 45"],
                vec!["React Fundamentals", "2024-01-10", "92%", "Rank #3 of 45"],
                vec!["JavaScript Advanced", "2024-01-05", "88%", "Rank #7 of 45"],
            ]
        );
    }

    #[test]
    fn trainee_schedule_and_tasks() {
        let upcoming = rows(&upcoming_tests_table(demo_upcoming_tests()));
        assert_eq!(
            upcoming[0],
            vec!["React Hooks Deep Dive", "MCQ + Coding", "2024-01-15", "10:00 AM • 90 mins"]
        );
        let tasks = rows(&tasks_table(demo_tasks()));
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[2][0], "[x]");
        assert_eq!(tasks[0][3], "high");
    }

    #[test]
    fn departments_sort_by_performance() {
        let mut table = departments_table(demo_departments());
        assert!(table.activate_column("performance"));
        let names: Vec<&str> = table.visible_rows().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Operations", "Product", "Engineering", "Data Science"]);
    }
}

//! Generic client side table: text search across chosen fields plus a single
//! column tri-state sort.
//!
//! The filtered and sorted view is derived lazily from the inputs and cached
//! until one of them changes.

mod cell;
mod sort;

use std::cell::OnceCell;

use tracing::{debug, instrument};

use crate::const_config::table::TABLE_DEFAULT_EMPTY_MESSAGE;

pub use cell::CellValue;
pub use sort::{compare_cells, SortDirection, SortState};

/// Field accessor contract for rows shown in a [`TableView`]
pub trait Record {
    /// Stable unique key used as the row's identity
    fn row_key(&self) -> String;

    /// Raw value of the field, [`CellValue::Missing`] for unknown keys
    fn field(&self, key: &str) -> CellValue;
}

type RenderFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

pub struct Column<T> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    render: Option<RenderFn<T>>,
}

impl<T: Record> Column<T> {
    pub fn new<K: Into<String>, L: Into<String>>(key: K, label: L) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Replaces the default rendering of the raw value. The function receives
    /// the whole row
    pub fn render_with<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn render_cell(&self, row: &T) -> String {
        match &self.render {
            Some(render) => render(row),
            None => row.field(&self.key).to_string(),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("has_render", &self.render.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// `None` when this column is not the one being sorted
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// A single message spanning all `colspan` columns
    Empty { message: String, colspan: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
}

#[derive(Debug)]
pub struct TableView<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    searchable: bool,
    search_keys: Vec<String>,
    empty_message: String,
    search_query: String,
    sort: SortState,
    /// Indices into `rows` of the filtered and sorted view
    view: OnceCell<Vec<usize>>,
}

impl<T: Record> TableView<T> {
    pub fn new(rows: Vec<T>, columns: Vec<Column<T>>) -> Self {
        Self {
            rows,
            columns,
            searchable: false,
            search_keys: Vec::new(),
            empty_message: TABLE_DEFAULT_EMPTY_MESSAGE.to_string(),
            search_query: String::new(),
            sort: SortState::default(),
            view: OnceCell::new(),
        }
    }

    /// Enables searching over the given fields
    pub fn searchable<I, S>(mut self, search_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable = true;
        self.search_keys = search_keys.into_iter().map(Into::into).collect();
        self.invalidate();
        self
    }

    pub fn empty_message<S: Into<String>>(mut self, message: S) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.invalidate();
    }

    pub fn set_search_keys<I, S>(&mut self, search_keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keys = search_keys.into_iter().map(Into::into).collect();
        self.invalidate();
    }

    pub fn set_search_query<S: Into<String>>(&mut self, query: S) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.invalidate();
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Handles activation of a column header. Columns that are unknown or not
    /// sortable are ignored and `false` is returned
    #[instrument(skip(self), fields(before = ?self.sort))]
    pub fn activate_column(&mut self, key: &str) -> bool {
        let is_sortable = self
            .columns
            .iter()
            .any(|column| column.key == key && column.sortable);
        if !is_sortable {
            debug!("ignoring activation of column that is not sortable");
            return false;
        }
        self.sort = self.sort.activate(key);
        self.invalidate();
        true
    }

    /// The rows to display, filtered then sorted
    pub fn visible_rows(&self) -> Vec<&T> {
        self.view().iter().map(|&i| &self.rows[i]).collect()
    }

    pub fn is_view_empty(&self) -> bool {
        self.view().is_empty()
    }

    pub fn render(&self) -> RenderedTable {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                direction: self.sort.direction_for(&column.key),
            })
            .collect();
        let body = if self.is_view_empty() {
            TableBody::Empty {
                message: self.empty_message.clone(),
                colspan: self.columns.len(),
            }
        } else {
            TableBody::Rows(
                self.visible_rows()
                    .into_iter()
                    .map(|row| RenderedRow {
                        key: row.row_key(),
                        cells: self
                            .columns
                            .iter()
                            .map(|column| column.render_cell(row))
                            .collect(),
                    })
                    .collect(),
            )
        };
        RenderedTable { headers, body }
    }

    fn invalidate(&mut self) {
        self.view.take();
    }

    fn view(&self) -> &[usize] {
        self.view.get_or_init(|| self.compute_view())
    }

    fn compute_view(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = if self.is_filter_active() {
            let query = self.search_query.to_lowercase();
            (0..self.rows.len())
                .filter(|&i| {
                    self.search_keys
                        .iter()
                        .any(|key| self.rows[i].field(key).search_text().contains(&query))
                })
                .collect()
        } else {
            (0..self.rows.len()).collect()
        };

        if let SortState::Sorted { key, direction } = &self.sort {
            // Stable so rows with equal keys keep their input order
            indices.sort_by(|&a, &b| {
                compare_cells(
                    &self.rows[a].field(key),
                    &self.rows[b].field(key),
                    *direction,
                )
            });
        }
        indices
    }

    fn is_filter_active(&self) -> bool {
        self.searchable && !self.search_query.is_empty() && !self.search_keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u32,
        name: &'static str,
        score: Option<u32>,
        team: &'static str,
    }

    impl Record for Person {
        fn row_key(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "name" => self.name.into(),
                "score" => self.score.into(),
                "team" => self.team.into(),
                _ => CellValue::Missing,
            }
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person { id: 1, name: "Priya", score: Some(87), team: "Full Stack" },
            Person { id: 2, name: "Arjun", score: Some(92), team: "Core Stack" },
            Person { id: 3, name: "Meera", score: None, team: "Core Stack" },
            Person { id: 4, name: "Deepika", score: Some(96), team: "Full Stack" },
            Person { id: 5, name: "Sanjay", score: Some(87), team: "AI-ML" },
        ]
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("score", "Score").sortable(),
            Column::new("team", "Team"),
        ]
    }

    fn view() -> TableView<Person> {
        TableView::new(people(), columns()).searchable(["name", "team"])
    }

    fn ids(view: &TableView<Person>) -> Vec<u32> {
        view.visible_rows().iter().map(|p| p.id).collect()
    }

    #[test]
    fn default_is_input_order() {
        assert_eq!(ids(&view()), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    #[case::upper_query_matches_mixed_case("PRI", vec![1])]
    #[case::substring_anywhere("stack", vec![1, 2, 3, 4])]
    #[case::second_key("ai-ml", vec![5])]
    #[case::no_match("zzz", vec![])]
    #[case::empty_query("", vec![1, 2, 3, 4, 5])]
    fn search(#[case] query: &str, #[case] expected: Vec<u32>) {
        // Arrange
        let mut view = view();

        // Act
        view.set_search_query(query);

        // Assert
        assert_eq!(ids(&view), expected);
    }

    #[test]
    fn empty_search_keys_disable_filtering() {
        let mut view = view();
        view.set_search_keys(Vec::<String>::new());
        view.set_search_query("zzz");
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn not_searchable_ignores_query() {
        let mut view = TableView::new(people(), columns());
        view.set_search_query("zzz");
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn missing_fields_never_match_search() {
        let mut view = TableView::new(people(), columns()).searchable(["score"]);
        view.set_search_query("8");
        assert_eq!(ids(&view), vec![1, 5]);
    }

    #[test]
    fn ascending_then_descending_is_reversed_then_cleared() {
        // Arrange
        let mut view = view();

        // Act / Assert - ascending
        assert!(view.activate_column("name"));
        let ascending = ids(&view);
        assert_eq!(ascending, vec![2, 4, 3, 1, 5]);

        // Act / Assert - descending is the exact reverse for distinct keys
        assert!(view.activate_column("name"));
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(ids(&view), reversed);

        // Act / Assert - third activation restores input order
        assert!(view.activate_column("name"));
        assert_eq!(view.sort_state(), &SortState::Unsorted);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_is_stable_and_missing_last() {
        let mut view = view();
        view.activate_column("score");
        // 1 and 5 tie on 87 and keep input order, 3 has no score
        assert_eq!(ids(&view), vec![1, 5, 2, 4, 3]);
        view.activate_column("score");
        assert_eq!(ids(&view), vec![4, 2, 1, 5, 3]);
    }

    #[test]
    fn switching_columns_starts_ascending() {
        let mut view = view();
        view.activate_column("name");
        view.activate_column("name");
        view.activate_column("score");
        assert_eq!(
            view.sort_state(),
            &SortState::Sorted {
                key: "score".to_string(),
                direction: SortDirection::Ascending
            }
        );
    }

    #[rstest]
    #[case::not_sortable("team")]
    #[case::unknown("nope")]
    fn activation_ignored(#[case] key: &str) {
        let mut view = view();
        assert!(!view.activate_column(key));
        assert_eq!(view.sort_state(), &SortState::Unsorted);
    }

    #[test]
    fn search_and_sort_combine() {
        let mut view = view();
        view.set_search_query("full");
        view.activate_column("score");
        view.activate_column("score");
        assert_eq!(ids(&view), vec![4, 1]);
    }

    #[test]
    fn view_follows_new_rows() {
        let mut view = view();
        view.set_search_query("arjun");
        assert_eq!(ids(&view), vec![2]);
        view.set_rows(people().into_iter().filter(|p| p.id != 2).collect());
        assert!(view.is_view_empty());
    }

    #[test]
    fn render_uses_custom_render_and_default_stringify() {
        // Arrange
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("score", "Score").render_with(|p: &Person| match p.score {
                Some(s) => format!("{s}%"),
                None => "N/A".to_string(),
            }),
            Column::new("not_a_field", "Broken"),
        ];
        let view = TableView::new(people(), columns);

        // Act
        let rendered = view.render();

        // Assert
        let TableBody::Rows(rows) = rendered.body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].key, "1");
        assert_eq!(rows[0].cells, vec!["Priya", "87%", ""]);
        assert_eq!(rows[2].cells, vec!["Meera", "N/A", ""]);
    }

    #[test]
    fn render_empty_state_spans_all_columns() {
        let mut view = view().empty_message("No trainees found");
        view.set_search_query("nobody");
        let rendered = view.render();
        assert_eq!(
            rendered.body,
            TableBody::Empty {
                message: "No trainees found".to_string(),
                colspan: 3
            }
        );
    }

    #[test]
    fn render_headers_show_sort_direction() {
        let mut view = view();
        view.activate_column("score");
        let headers = view.render().headers;
        assert_eq!(headers[0].direction, None);
        assert_eq!(headers[1].direction, Some(SortDirection::Ascending));
        assert!(!headers[2].sortable);
    }

    #[test]
    fn default_empty_message() {
        let view = TableView::new(Vec::<Person>::new(), columns());
        assert_eq!(
            view.render().body,
            TableBody::Empty {
                message: TABLE_DEFAULT_EMPTY_MESSAGE.to_string(),
                colspan: 3
            }
        );
    }
}

use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TaskChoice {
    #[strum(serialize = "Train a model")]
    Train,
    #[strum(serialize = "Predict from a saved model")]
    Predict,
    #[strum(serialize = "Quit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SourceChoice {
    #[strum(serialize = "CSV file")]
    CsvFile,
    #[strum(serialize = "Synthetic accident stream")]
    Synthetic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_task_has_a_menu_label() {
        let labels: Vec<String> = TaskChoice::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Train a model", "Predict from a saved model", "Quit"]
        );
    }
}

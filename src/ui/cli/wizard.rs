use std::collections::HashMap;

use anyhow::{Context, Result};
use inquire::{CustomType, Select, Text};
use strum::IntoEnumIterator;

use crate::artifact::ModelArtifact;
use crate::evaluation::{ConfusionSummary, holdout_split};
use crate::service::PredictionService;
use crate::streams::generators::AccidentGenerator;
use crate::streams::{CsvRowStream, DataHeader, RawRow, RowStream, VecRowStream};
use crate::training::{LearnerKind, Trainer, TrainingConfig};
use crate::ui::types::{SourceChoice, TaskChoice};

const OTHER_OPTION: &str = "other (type a value)";
const HOLDOUT_FRACTION: f64 = 0.2;
const HOLDOUT_SEED: u64 = 42;

/// Interactive entry point: train an artifact, or load one and predict.
pub struct Wizard;

impl Wizard {
    pub fn run() -> Result<()> {
        loop {
            let task =
                Select::new("What do you want to do?", TaskChoice::iter().collect()).prompt()?;
            match task {
                TaskChoice::Train => Self::train_flow()?,
                TaskChoice::Predict => Self::predict_flow()?,
                TaskChoice::Quit => break,
            }
        }
        Ok(())
    }

    fn train_flow() -> Result<()> {
        let source = Select::new(
            "Training data source:",
            SourceChoice::iter().collect(),
        )
        .prompt()?;

        let (header, rows) = match source {
            SourceChoice::CsvFile => {
                let path = Text::new("CSV path:")
                    .with_initial_value("accidents.csv")
                    .prompt()?;
                let relation = Text::new("Relation name:")
                    .with_initial_value("accidents")
                    .prompt()?;
                let mut stream = CsvRowStream::open(&path, &relation)
                    .with_context(|| format!("opening '{path}'"))?;
                Self::drain(&mut stream)
            }
            SourceChoice::Synthetic => {
                let rows_wanted = CustomType::<u64>::new("Rows to generate:")
                    .with_default(500)
                    .prompt()?;
                let noise = CustomType::<f32>::new("Label noise (0.0 - 1.0):")
                    .with_default(0.05)
                    .prompt()?;
                let seed = CustomType::<u64>::new("Seed:").with_default(42).prompt()?;
                let mut stream = AccidentGenerator::new(noise, Some(rows_wanted as usize), seed)?;
                Self::drain(&mut stream)
            }
        };

        let learner = Select::new("Learner:", LearnerKind::iter().collect()).prompt()?;
        let positive_class = Text::new("Positive (risk) class label:")
            .with_initial_value("Accident")
            .prompt()?;

        let (train_rows, test_rows) = holdout_split(&rows, HOLDOUT_FRACTION, HOLDOUT_SEED)?;
        let trainer = Trainer::new(TrainingConfig::new(learner, positive_class));
        let artifact = trainer.fit(&mut VecRowStream::new(header, train_rows))?;
        let service = PredictionService::from_artifact(&artifact)?;

        let mut summary = ConfusionSummary::new();
        for row in &test_rows {
            let raw = Self::row_as_input(&artifact, row);
            let result = service.predict_from_labels(&raw)?;
            summary.record(&result.label, &row.class_label);
        }
        println!("Holdout evaluation:\n{summary}");

        let output = Text::new("Artifact path:")
            .with_initial_value("model.json")
            .prompt()?;
        artifact
            .save(&output)
            .with_context(|| format!("writing '{output}'"))?;
        println!("Artifact saved to {output}");
        Ok(())
    }

    fn predict_flow() -> Result<()> {
        let path = Text::new("Artifact path:")
            .with_initial_value("model.json")
            .prompt()?;
        let artifact =
            ModelArtifact::load(&path).with_context(|| format!("loading '{path}'"))?;
        let service = PredictionService::from_artifact(&artifact)?;

        let mut raw = HashMap::new();
        for (name, encoder) in service.feature_set().columns() {
            let mut options: Vec<String> = encoder.vocabulary().to_vec();
            options.push(OTHER_OPTION.into());
            let picked = Select::new(&format!("{name}:"), options).prompt()?;
            let value = if picked == OTHER_OPTION {
                Text::new(&format!("{name} value:")).prompt()?
            } else {
                picked
            };
            raw.insert(name.clone(), value);
        }

        let result = service.predict_from_labels(&raw)?;
        println!("Prediction: {result}");
        if result.degraded {
            println!(
                "Warning: at least one value was unseen during training; \
                 treat this prediction as lower-confidence."
            );
        }
        Ok(())
    }

    fn drain(stream: &mut dyn RowStream) -> (DataHeader, Vec<RawRow>) {
        let header = stream.header().clone();
        let mut rows = Vec::new();
        while let Some(row) = stream.next_row() {
            rows.push(row);
        }
        (header, rows)
    }

    fn row_as_input(artifact: &ModelArtifact, row: &RawRow) -> HashMap<String, String> {
        artifact
            .feature_names
            .iter()
            .cloned()
            .zip(row.features.iter().cloned())
            .collect()
    }
}

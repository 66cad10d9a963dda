use crate::error::Result;
use crate::reporter::yml::model::SuiteResult;

/// Renders the document as block style YAML.
pub fn render(suite: &SuiteResult) -> Result<String> {
    Ok(serde_yaml::to_string(suite)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::yml::model::Status;

    #[test]
    fn test_rendering_uses_report_keys() {
        let suite = SuiteResult {
            project_name: "shop".to_owned(),
            timestamp: "Jan 2, 2024 at 3:04pm".to_owned(),
            success_rate: 100,
            environment: "default".to_owned(),
            tags: String::new(),
            execution_time: 12,
            execution_status: Status::Pass,
            spec_results: vec![],
            before_suite_hook_failure: None,
            after_suite_hook_failure: None,
            passed_specs_count: 0,
            failed_specs_count: 0,
            skipped_specs_count: 0,
        };

        let yaml = render(&suite).unwrap();

        assert!(yaml.starts_with("projectName: shop\n"));
        assert!(yaml.contains("successRate: 100\n"));
        assert!(yaml.contains("executionStatus: pass\n"));
        assert!(yaml.contains("specResults: []\n"));
        assert!(yaml.contains("beforeSuiteHookFailure: null\n"));
        assert!(yaml.contains("skippedSpecsCount: 0\n"));
    }
}

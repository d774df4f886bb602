//! Attach fonts to build targets in the native project's object graph.

use log::{debug, info};

use crate::{groups::TargetGroups, Error};

const GROUP_NAME: &str = "Fonts";
const GROUP_PATH: &str = "Fonts";
/// File classification recorded for each attached font.
const FILE_TYPE: &str = "file";
/// Font paths resolve relative to their group, not the project or SDK root.
const SOURCE_TREE: &str = "<group>";

/// The native project document, reduced to the operations this plugin needs.
///
/// Implement this against whatever pbxproj library the enclosing generator
/// uses; ids are whatever that library keys its object table with.
pub trait ProjectGraph {
    /// Look up a build target by its exact name.
    fn find_target_by_name(&self, name: &str) -> Option<String>;
    /// Create a group at `path` containing `files`, returning its id.
    fn create_resource_group(&mut self, name: &str, path: &str, files: &[String]) -> String;
    /// Hang a group off the project's main group.
    fn attach_group_to_root(&mut self, group_id: &str);
    /// Add a file to a target's resources build phase.
    fn attach_resource_file(
        &mut self,
        target_id: &str,
        file: &str,
        file_type: &str,
        source_tree: &str,
    );
}

/// Attach every grouped font to its build target.
///
/// Each target gets its own `Fonts` group even though they all share the
/// name. A target missing from the project is fatal; mutations already made
/// for earlier targets (and the failing target's group) stay applied, the
/// generator discards the graph without serializing it.
pub fn update_project(graph: &mut impl ProjectGraph, groups: &TargetGroups) -> Result<(), Error> {
    for (target_name, fonts) in groups {
        info!("adding {} font(s) to target {target_name}", fonts.len());
        let files: Vec<String> = fonts.iter().map(|f| f.file_path.clone()).collect();

        let group = graph.create_resource_group(GROUP_NAME, GROUP_PATH, &files);
        graph.attach_group_to_root(&group);

        let target = graph
            .find_target_by_name(target_name)
            .ok_or_else(|| Error::TargetNotFound(target_name.clone()))?;
        debug!("target {target_name} resolved to {target}");

        for file in &files {
            graph.attach_resource_file(&target, file, FILE_TYPE, SOURCE_TREE);
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fake::{FakeProject, Resource};
    use super::*;
    use crate::config::{FontAsset, Platform};
    use crate::groups::group_by_target;

    fn font(file_path: &str, targets: &[&str]) -> FontAsset {
        FontAsset {
            file_path: file_path.to_string(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
            name: None,
            platform: Platform::Ios,
        }
    }

    fn resource(file: &str) -> Resource {
        Resource {
            file: file.to_string(),
            file_type: "file".to_string(),
            source_tree: "<group>".to_string(),
        }
    }

    #[test]
    fn attaches_group_and_resources() {
        let fonts = vec![
            font("Inter.ttf", &["MainApp"]),
            font("display/Grotesk.otf", &["MainApp"]),
        ];
        let refs: Vec<_> = fonts.iter().collect();
        let groups = group_by_target(&refs).unwrap();

        let mut project = FakeProject::with_targets(&["MainApp"]);
        update_project(&mut project, &groups).unwrap();

        assert_eq!(1, project.groups.len());
        let group = project.groups.values().next().unwrap();
        assert_eq!("Fonts", group.name);
        assert_eq!("Fonts", group.path);
        assert_eq!(vec!["Inter.ttf", "display/Grotesk.otf"], group.files);

        let group_id = project.groups.keys().next().unwrap();
        assert_eq!(vec![group_id.clone()], project.root_children);

        assert_eq!(
            &[resource("Inter.ttf"), resource("display/Grotesk.otf")],
            project.resources_of("MainApp")
        );
    }

    #[test]
    fn one_group_per_target_even_with_shared_fonts() {
        let fonts = vec![font("Inter.ttf", &["MainApp", "ShareExtension"])];
        let refs: Vec<_> = fonts.iter().collect();
        let groups = group_by_target(&refs).unwrap();

        let mut project = FakeProject::with_targets(&["MainApp", "ShareExtension"]);
        update_project(&mut project, &groups).unwrap();

        assert_eq!(2, project.groups.len());
        assert_eq!(2, project.root_children.len());
        assert_eq!(&[resource("Inter.ttf")], project.resources_of("MainApp"));
        assert_eq!(
            &[resource("Inter.ttf")],
            project.resources_of("ShareExtension")
        );
    }

    #[test]
    fn unknown_target_is_fatal() {
        let fonts = vec![font("Inter.ttf", &["Ghost"])];
        let refs: Vec<_> = fonts.iter().collect();
        let groups = group_by_target(&refs).unwrap();

        let mut project = FakeProject::with_targets(&["MainApp"]);
        let err = update_project(&mut project, &groups).unwrap_err();
        assert!(matches!(err, Error::TargetNotFound(ref name) if name == "Ghost"));
        assert!(project.resources_of("MainApp").is_empty());
    }

    #[test]
    fn earlier_targets_keep_their_mutations_later_ones_are_untouched() {
        let fonts = vec![
            font("A.ttf", &["MainApp"]),
            font("B.ttf", &["Ghost"]),
            font("C.ttf", &["Widget"]),
        ];
        let refs: Vec<_> = fonts.iter().collect();
        let groups = group_by_target(&refs).unwrap();

        let mut project = FakeProject::with_targets(&["MainApp", "Widget"]);
        let err = update_project(&mut project, &groups).unwrap_err();
        assert!(matches!(err, Error::TargetNotFound(ref name) if name == "Ghost"));

        // MainApp was processed before the failure and stays mutated;
        // Ghost's group was created before target resolution failed
        assert_eq!(&[resource("A.ttf")], project.resources_of("MainApp"));
        assert_eq!(2, project.groups.len());
        // Widget comes after the failure and was never touched
        assert!(project.resources_of("Widget").is_empty());
    }
}

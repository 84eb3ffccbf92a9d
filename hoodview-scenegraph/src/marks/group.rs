use crate::marks::mark::SceneMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub marks: Vec<SceneMark>,
    pub zindex: Option<i32>,
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "group".to_string(),
            origin: [0.0, 0.0],
            width: None,
            height: None,
            marks: vec![],
            zindex: None,
        }
    }
}

impl SceneGroup {
    /// Paths of nested groups, relative to this group
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }
}

pub mod marks;
pub mod scene_graph;

//! Locating the element that should receive the zoom transform.

/// The slice of a DOM element the ancestor walk needs.
pub trait DomNode: Sized {
    fn parent(&self) -> Option<Self>;
    fn has_class(&self, class: &str) -> bool;
}

/// Prefers an ancestor of `video` carrying `wrapper_class`, searched at most
/// `depth` levels up, and falls back to the video itself. `None` when there is
/// no video.
pub fn find_zoom_target<N: DomNode>(video: Option<N>, wrapper_class: &str, depth: usize) -> Option<N> {
    let video = video?;
    let mut ancestor = video.parent();
    for _ in 0..depth {
        let Some(node) = ancestor else {
            break;
        };
        if node.has_class(wrapper_class) {
            return Some(node);
        }
        ancestor = node.parent();
    }
    Some(video)
}

#[cfg(target_arch = "wasm32")]
impl DomNode for web_sys::Element {
    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A node in a flat arena: `(classes, parent index)`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Node<'a> {
        tree: &'a [(&'a str, Option<usize>)],
        index: usize,
    }

    impl DomNode for Node<'_> {
        fn parent(&self) -> Option<Self> {
            self.tree[self.index].1.map(|index| Node {
                tree: self.tree,
                index,
            })
        }

        fn has_class(&self, class: &str) -> bool {
            self.tree[self.index].0.split_whitespace().any(|c| c == class)
        }
    }

    fn chain(wrapper_at: Option<usize>, len: usize) -> Vec<(&'static str, Option<usize>)> {
        // index 0 is the video, each next index is its parent
        (0..len)
            .map(|i| {
                let class = if Some(i) == wrapper_at {
                    "bpx-player-video-wrap other"
                } else {
                    "plain"
                };
                let parent = if i + 1 < len { Some(i + 1) } else { None };
                (class, parent)
            })
            .collect()
    }

    #[test]
    fn test_no_video() {
        assert_eq!(find_zoom_target::<Node<'_>>(None, "bpx-player-video-wrap", 5), None);
    }

    #[test]
    fn test_wrapper_within_reach() {
        let tree = chain(Some(3), 8);
        let video = Node { tree: &tree, index: 0 };
        let found = find_zoom_target(Some(video), "bpx-player-video-wrap", 5).unwrap();
        assert_eq!(found.index, 3);
    }

    #[test]
    fn test_wrapper_at_depth_limit() {
        let tree = chain(Some(5), 8);
        let video = Node { tree: &tree, index: 0 };
        assert_eq!(find_zoom_target(Some(video), "bpx-player-video-wrap", 5).unwrap().index, 5);
    }

    #[test]
    fn test_wrapper_too_far_falls_back_to_video() {
        let tree = chain(Some(6), 8);
        let video = Node { tree: &tree, index: 0 };
        assert_eq!(find_zoom_target(Some(video), "bpx-player-video-wrap", 5).unwrap().index, 0);
    }

    #[test]
    fn test_short_chain_falls_back_to_video() {
        let tree = chain(None, 2);
        let video = Node { tree: &tree, index: 0 };
        assert_eq!(find_zoom_target(Some(video), "bpx-player-video-wrap", 5).unwrap().index, 0);
    }
}

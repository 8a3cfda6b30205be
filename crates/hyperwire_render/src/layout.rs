//! Attribute layout planning for N-dimensional vertex streams
//!
//! Vertex-attribute slots carry at most 4 components, so an N-dimensional
//! float tuple is split into ceil(N/4) consecutive groups: every group
//! holds 4 components except possibly the last, which holds `N mod 4`
//! when that remainder is non-zero. The planning functions are pure
//! metadata computation, total over `dimensions >= 1`; [`AttributeLayout`]
//! turns the plan into the concrete `wgpu` vertex-buffer layout.

use hyperwire_core::COMPONENTS_PER_GROUP;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

/// Number of attribute groups an N-dimensional tuple needs: ceil(N/4).
pub fn num_groups(dimensions: usize) -> usize {
    dimensions.div_ceil(COMPONENTS_PER_GROUP)
}

/// Components carried by a given group: 4 for every group except a
/// non-full final group.
pub fn components_in_group(dimensions: usize, group: usize) -> usize {
    let remainder = dimensions % COMPONENTS_PER_GROUP;
    if group == num_groups(dimensions) - 1 && remainder != 0 {
        remainder
    } else {
        COMPONENTS_PER_GROUP
    }
}

/// Byte offset of a group within one vertex: 4 floats per preceding group.
pub fn byte_offset(group: usize) -> usize {
    group * COMPONENTS_PER_GROUP * FLOAT_SIZE
}

/// Byte stride of one N-dimensional vertex.
pub fn stride_bytes(dimensions: usize) -> usize {
    dimensions * FLOAT_SIZE
}

/// The concrete attribute layout for one ambient dimension.
///
/// Owns its `wgpu::VertexAttribute` list so [`buffer_layout`] can hand out
/// a borrowed `VertexBufferLayout`.
///
/// [`buffer_layout`]: AttributeLayout::buffer_layout
pub struct AttributeLayout {
    dimensions: usize,
    attributes: Vec<wgpu::VertexAttribute>,
}

impl AttributeLayout {
    /// Plan the layout for an N-dimensional vertex stream.
    ///
    /// # Panics
    /// Panics if `dimensions` is zero.
    pub fn new(dimensions: usize) -> Self {
        assert!(dimensions >= 1, "attribute layout requires dimensions >= 1");
        let attributes = (0..num_groups(dimensions))
            .map(|group| wgpu::VertexAttribute {
                format: format_for(components_in_group(dimensions, group)),
                offset: byte_offset(group) as wgpu::BufferAddress,
                shader_location: group as u32,
            })
            .collect();
        Self {
            dimensions,
            attributes,
        }
    }

    /// The ambient dimension this layout was planned for.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of attribute groups.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.attributes.len()
    }

    /// The planned vertex attributes, one per group.
    #[inline]
    pub fn attributes(&self) -> &[wgpu::VertexAttribute] {
        &self.attributes
    }

    /// The vertex-buffer layout to bake into a render pipeline.
    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: stride_bytes(self.dimensions) as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}

fn format_for(components: usize) -> wgpu::VertexFormat {
    match components {
        1 => wgpu::VertexFormat::Float32,
        2 => wgpu::VertexFormat::Float32x2,
        3 => wgpu::VertexFormat::Float32x3,
        4 => wgpu::VertexFormat::Float32x4,
        _ => unreachable!("attribute groups carry 1..=4 components"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_count_is_ceil_of_quarters() {
        for (dims, expected) in [(1, 1), (2, 1), (3, 1), (4, 1), (5, 2), (7, 2), (8, 2)] {
            assert_eq!(num_groups(dims), expected, "dims={}", dims);
        }
    }

    #[test]
    fn group_components_sum_to_dimension() {
        for dims in 1..=8 {
            let total: usize = (0..num_groups(dims))
                .map(|g| components_in_group(dims, g))
                .sum();
            assert_eq!(total, dims, "dims={}", dims);
        }
    }

    #[test]
    fn five_dimensions_split_four_one() {
        assert_eq!(num_groups(5), 2);
        assert_eq!(components_in_group(5, 0), 4);
        assert_eq!(components_in_group(5, 1), 1);
    }

    #[test]
    fn eight_dimensions_split_four_four() {
        assert_eq!(num_groups(8), 2);
        assert_eq!(components_in_group(8, 0), 4);
        assert_eq!(components_in_group(8, 1), 4);
    }

    #[test]
    fn offsets_and_strides_count_floats() {
        assert_eq!(byte_offset(0), 0);
        assert_eq!(byte_offset(1), 16);
        assert_eq!(stride_bytes(4), 16);
        assert_eq!(stride_bytes(7), 28);
    }

    #[test]
    fn line_list_invariant_for_a_tesseract_buffer() {
        // 48 floats of 4D data: 12 endpoint pairs, 6 drawn edges.
        let floats = 48;
        let dims = 4;
        assert_eq!(floats % (2 * dims), 0);
        assert_eq!(stride_bytes(dims), 16);
    }

    #[test]
    fn layout_formats_match_group_widths() {
        let layout = AttributeLayout::new(5);
        let attrs = layout.attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[0].shader_location, 0);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32);
        assert_eq!(attrs[1].offset, 16);
        assert_eq!(attrs[1].shader_location, 1);
    }

    #[test]
    fn buffer_layout_stride_matches_dimension() {
        let layout = AttributeLayout::new(7);
        let buffer_layout = layout.buffer_layout();
        assert_eq!(buffer_layout.array_stride, 28);
        assert_eq!(buffer_layout.attributes.len(), 2);
    }
}

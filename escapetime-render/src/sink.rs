use crate::frame::FrameBuffer;

/// The display collaborator, seen from the core's side.
///
/// Window creation, input handling, and presentation timing all live behind
/// this trait; the renderer only hands over a completed grid of colors.
pub trait FrameSink {
    /// Accept a fully populated frame for presentation.
    fn present(&mut self, frame: &FrameBuffer);
}

/// Blanket impl so `&mut S` works wherever a sink is expected.
impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn present(&mut self, frame: &FrameBuffer) {
        (**self).present(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapetime_core::RasterSize;

    struct CountingSink {
        presented: usize,
    }

    impl FrameSink for CountingSink {
        fn present(&mut self, _frame: &FrameBuffer) {
            self.presented += 1;
        }
    }

    #[test]
    fn sink_receives_frames_through_mut_ref() {
        let raster = RasterSize::new(2, 2).unwrap();
        let frame = FrameBuffer::new(raster);
        let mut sink = CountingSink { presented: 0 };

        {
            let mut by_ref: &mut CountingSink = &mut sink;
            by_ref.present(&frame);
        }
        sink.present(&frame);

        assert_eq!(sink.presented, 2);
    }
}

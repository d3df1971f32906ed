/// A drawable area that is cleared, drawn to and presented once per frame.
pub trait Surface {
    fn clear(&mut self) -> anyhow::Result<()>;

    /// Draws a one pixel wide line covering the rows `top..=bottom` of column `x`.
    fn draw_vertical_line(
        &mut self,
        x: i32,
        top: i32,
        bottom: i32,
    ) -> anyhow::Result<()>;

    fn present(&mut self) -> anyhow::Result<()>;
}

use crate::error::ThemeError;
use crate::palette::ColorMap;

use super::color;

const TARGET: &str = "btop.theme";

/// Btop system monitor theme.
pub fn render(_theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, TARGET, key);
    Ok(format!(
        r#"theme[main_bg]="{crust}"
theme[main_fg]="{text}"
theme[title]="{pink}"
theme[hi_fg]="{mauve}"
theme[selected_bg]="{surface2}"
theme[selected_fg]="{pink}"
theme[inactive_fg]="{overlay0}"
theme[graph_text]="{subtext1}"
theme[meter_bg]="{base}"
theme[proc_misc]="{pink}"
theme[cpu_box]="{mauve}"
theme[mem_box]="{green}"
theme[net_box]="{blue}"
theme[proc_box]="{yellow}"
theme[div_line]="{surface1}"
theme[temp_start]="{green}"
theme[temp_mid]="{yellow}"
theme[temp_end]="{red}"
theme[cpu_start]="{blue}"
theme[cpu_mid]="{mauve}"
theme[cpu_end]="{pink}"
theme[free_start]="{mauve}"
theme[free_mid]="{pink}"
theme[free_end]="{maroon}"
theme[cached_start]="{sky}"
theme[cached_mid]="{lavender}"
theme[cached_end]="{mauve}"
theme[available_start]="{peach}"
theme[available_mid]="{yellow}"
theme[available_end]="{green}"
theme[used_start]="{red}"
theme[used_mid]="{peach}"
theme[used_end]="{yellow}"
theme[download_start]="{green}"
theme[download_mid]="{sky}"
theme[download_end]="{blue}"
theme[upload_start]="{yellow}"
theme[upload_mid]="{peach}"
theme[upload_end]="{red}"
theme[process_start]="{blue}"
theme[process_mid]="{lavender}"
theme[process_end]="{mauve}"
"#,
        crust = c("crust")?,
        text = c("text")?,
        pink = c("pink")?,
        mauve = c("mauve")?,
        surface2 = c("surface2")?,
        overlay0 = c("overlay0")?,
        subtext1 = c("subtext1")?,
        base = c("base")?,
        green = c("green")?,
        blue = c("blue")?,
        yellow = c("yellow")?,
        surface1 = c("surface1")?,
        red = c("red")?,
        maroon = c("maroon")?,
        sky = c("sky")?,
        lavender = c("lavender")?,
        peach = c("peach")?,
    ))
}

use colored::*;

const BANNER_0: &str = r#"
          _____ ____ _____  _  _____ _____
         | ____/ ___|_   _|/ \|_   _| ____|
         |  _| \___ \ | | / _ \ | | |  _|
         | |___ ___) || |/ ___ \| | | |___
         |_____|____/ |_/_/   \_\_| |_____|
"#;

const BANNER_1: &str = r#"
                    ___
           _       |[]|        _____
          | |  __  |[]|  ___  |[][]|    _
         _| |_|  |_|[]|_|   |_|[][]|__ | |_
        |_____|__|____|_|___|_|____|__||___|
"#;

const BANNER_2: &str = r#"
        ___  ___  _____  _    _____  ___
       | __|/ __||_   _|/_\  |_   _|| __|
       | _| \__ \  | | / _ \   | |  | _|
       |___||___/  |_|/_/ \_\  |_|  |___|
"#;

/// Prints one of the banners, picked at random.
pub fn print() {
    let n: u8 = rand::random_range(0..=2);
    let art: ColoredString = match n {
        0 => BANNER_0.bright_green(),
        1 => BANNER_1.truecolor(255, 165, 0),
        _ => BANNER_2.blue(),
    };
    super::print::print(&art.to_string());
}

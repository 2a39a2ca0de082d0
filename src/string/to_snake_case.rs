/// `HelloWorld` -> `hello_world`. Every ASCII uppercase letter after the
/// first character gets its own `_`, so `ABC` -> `a_b_c`.
pub fn to_snake_case(text: &str) -> String {
    let mut snake = String::with_capacity(text.len() + text.len() / 2);
    for (index, ch) in text.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            snake.push('_');
        }
        snake.extend(ch.to_lowercase());
    }
    snake
}

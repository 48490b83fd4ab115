use crate::models::Review;
use std::sync::LazyLock;

static REVIEWS: LazyLock<Vec<Review>> = LazyLock::new(|| {
    vec![
        review(
            "1",
            "Алексей К.",
            "Отличное место! Пришёл новичком, уже через месяц играю регулярно. Атмосфера супер!",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
        ),
        review(
            "2",
            "Мария С.",
            "Записались с подругами на корпоратив — было весело! Обязательно вернёмся.",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
        ),
        review(
            "3",
            "Дмитрий В.",
            "Перешёл с тенниса — падл более динамичный и социальный. Рекомендую!",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop",
        ),
        review(
            "4",
            "Елена П.",
            "Тренер объяснил все правила за 10 минут. Теперь хожу каждую неделю.",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
        ),
    ]
});

fn review(id: &str, name: &str, text: &str, avatar: &str) -> Review {
    Review {
        id: id.to_string(),
        name: name.to_string(),
        text: text.to_string(),
        rating: 5,
        avatar: Some(avatar.to_string()),
    }
}

pub fn all() -> &'static [Review] {
    &REVIEWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviews_are_fixed() {
        let reviews = all();
        assert_eq!(reviews.len(), 4);
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert!(reviews.iter().all(|r| (1..=5).contains(&r.rating)));
    }
}

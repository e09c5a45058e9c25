//! Static course catalogue served when the search backend cannot be reached.
//! The list is fixed and independent of the query.

use std::time::Duration;

use crate::course::Course;

pub const MOCK_COURSE_COUNT: usize = 6;

/// Pause applied before handing out mock results, so a failed search does not
/// return faster than a live one.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(800);

const MOCK_COURSES: [(&str, f64, u64, bool, &str); MOCK_COURSE_COUNT] = [
    (
        "Complete Python Bootcamp: Go from zero to hero in Python 3",
        4.6,
        450_000,
        true,
        "https://www.udemy.com/course/complete-python-bootcamp/",
    ),
    (
        "Machine Learning A-Z™: Hands-On Python & R In Data Science",
        4.5,
        180_000,
        true,
        "https://www.udemy.com/course/machinelearning/",
    ),
    (
        "Python for Data Science and Machine Learning Bootcamp",
        4.7,
        120_000,
        false,
        "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
    ),
    (
        "The Web Developer Bootcamp 2024",
        4.8,
        250_000,
        true,
        "https://www.udemy.com/course/the-web-developer-bootcamp/",
    ),
    (
        "React - The Complete Guide (incl Hooks, React Router, Redux)",
        4.7,
        190_000,
        true,
        "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
    ),
    (
        "Angular - The Complete Guide (2024 Edition)",
        4.6,
        150_000,
        true,
        "https://www.udemy.com/course/the-complete-guide-to-angular-2/",
    ),
];

pub fn mock_courses() -> Vec<Course> {
    MOCK_COURSES
        .iter()
        .map(|&(title, rating, num_reviews, is_paid, url)| Course {
            title: title.to_string(),
            rating,
            num_reviews,
            is_paid,
            url: url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_records_in_fixed_order() {
        let courses = mock_courses();
        assert_eq!(courses.len(), MOCK_COURSE_COUNT);
        assert_eq!(
            courses[0].title,
            "Complete Python Bootcamp: Go from zero to hero in Python 3"
        );
        assert_eq!(courses[5].title, "Angular - The Complete Guide (2024 Edition)");
    }

    #[test]
    fn test_only_data_science_bootcamp_is_free() {
        let free: Vec<_> = mock_courses().into_iter().filter(|c| !c.is_paid).collect();
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].rating, 4.7);
        assert_eq!(free[0].num_reviews, 120_000);
    }

    #[test]
    fn test_records_are_well_formed() {
        for course in mock_courses() {
            assert!((0.0..=5.0).contains(&course.rating), "{}", course.title);
            assert!(course.url.starts_with("https://www.udemy.com/course/"));
        }
    }
}

use shared::MovieDto;

use crate::domain::models::Movie;

pub struct MovieMapper;

impl MovieMapper {
    /// Convert a catalog movie to its DTO, including the list display string
    pub fn to_dto(movie: &Movie) -> MovieDto {
        MovieDto {
            id: movie.id().to_string(),
            genre: movie.genre().to_string(),
            title: movie.title().to_string(),
            director: movie.director().to_string(),
            year: movie.year(),
            description: movie.description().to_string(),
            runtime: movie.runtime(),
            display: movie.to_string(),
        }
    }

    pub fn to_dto_list<M: AsRef<Movie>>(movies: &[M]) -> Vec<MovieDto> {
        movies.iter().map(|m| Self::to_dto(m.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_to_dto() {
        let movie = Movie::new("Drama", "Titanic", "James Cameron", 1997, "Ship", 194).expect("valid movie");

        let dto = MovieMapper::to_dto(&movie);

        assert_eq!(dto.id, movie.id());
        assert_eq!(dto.runtime, 194);
        assert_eq!(dto.display, "Titanic Drama James Cameron 1997 Ship");
    }

    #[test]
    fn test_to_dto_list_keeps_order() {
        let movies = vec![
            Arc::new(Movie::new("Drama", "A", "D", 2000, "x", 90).expect("valid movie")),
            Arc::new(Movie::new("Drama", "B", "D", 2001, "y", 95).expect("valid movie")),
        ];

        let titles: Vec<String> = MovieMapper::to_dto_list(&movies).into_iter().map(|m| m.title).collect();

        assert_eq!(titles, vec!["A", "B"]);
    }
}

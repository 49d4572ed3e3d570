use std::collections::BTreeSet;

use crate::domain::genre::Genre;
use crate::domain::types::CategoryId;
use crate::dto::genres::{
    CreateGenreRequest, CreateGenreResponse, DeleteGenreRequest, GenreDto, GetGenreRequest,
    ListGenreResponse, UpdateGenreRequest,
};
use crate::repository::{CategoryReader, GenreReader, GenreWriter};

use super::{ServiceError, ServiceResult};

/// Fail with the ids from `requested` that are not stored in `category_repo`.
fn ensure_categories_exist<C>(
    requested: &BTreeSet<CategoryId>,
    category_repo: &C,
) -> ServiceResult<()>
where
    C: CategoryReader,
{
    let existing = category_repo
        .list_categories()
        .map_err(|e| {
            log::error!("Failed to list categories: {e}");
            ServiceError::Internal
        })?
        .into_iter()
        .map(|category| category.id)
        .collect::<BTreeSet<_>>();

    let missing: BTreeSet<CategoryId> = requested.difference(&existing).copied().collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::RelatedCategoriesNotFound(missing))
    }
}

/// Store a new genre whose categories must all exist.
pub fn create_genre<G, C>(
    request: CreateGenreRequest,
    genre_repo: &G,
    category_repo: &C,
) -> ServiceResult<CreateGenreResponse>
where
    G: GenreWriter,
    C: CategoryReader,
{
    ensure_categories_exist(&request.category_ids, category_repo)?;

    let genre = Genre::new(request.name)
        .map_err(ServiceError::InvalidGenre)?
        .with_categories(request.category_ids)
        .with_active(request.is_active);

    genre_repo.save_genre(&genre).map_err(|e| {
        log::error!("Failed to save genre: {e}");
        ServiceError::Internal
    })?;

    log::info!("Created genre {}", genre.id);
    Ok(CreateGenreResponse { id: genre.id })
}

pub fn get_genre<G>(request: GetGenreRequest, genre_repo: &G) -> ServiceResult<GenreDto>
where
    G: GenreReader,
{
    match genre_repo.get_genre_by_id(request.id) {
        Ok(Some(genre)) => Ok(GenreDto::from(genre)),
        Ok(None) => Err(ServiceError::GenreNotFound(request.id)),
        Err(e) => {
            log::error!("Failed to get genre: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_genres<G>(genre_repo: &G) -> ServiceResult<ListGenreResponse>
where
    G: GenreReader,
{
    match genre_repo.list_genres() {
        Ok(genres) => Ok(ListGenreResponse {
            data: genres.into_iter().map(GenreDto::from).collect(),
        }),
        Err(e) => {
            log::error!("Failed to list genres: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Apply the fields present in `request` to an existing genre.
///
/// The resulting category set is always checked against the category
/// repository, even when it equals the current one, and nothing is written
/// unless every check passes.
pub fn update_genre<G, C>(
    request: UpdateGenreRequest,
    genre_repo: &G,
    category_repo: &C,
) -> ServiceResult<()>
where
    G: GenreReader + GenreWriter,
    C: CategoryReader,
{
    let mut genre = match genre_repo.get_genre_by_id(request.id) {
        Ok(Some(genre)) => genre,
        Ok(None) => return Err(ServiceError::GenreNotFound(request.id)),
        Err(e) => {
            log::error!("Failed to get genre: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let name = request
        .name
        .unwrap_or_else(|| genre.name.as_str().to_string());
    let categories = request
        .category_ids
        .unwrap_or_else(|| genre.categories.clone());

    ensure_categories_exist(&categories, category_repo)?;

    genre.change_name(name).map_err(ServiceError::InvalidGenre)?;

    let to_remove: Vec<CategoryId> = genre
        .categories
        .difference(&categories)
        .copied()
        .collect();
    for category_id in to_remove {
        genre.remove_category(category_id);
    }
    let to_add: Vec<CategoryId> = categories.difference(&genre.categories).copied().collect();
    for category_id in to_add {
        genre.add_category(category_id);
    }

    match request.is_active {
        Some(true) => genre.activate(),
        Some(false) => genre.deactivate(),
        None => {}
    }

    genre_repo.update_genre(&genre).map_err(|e| {
        log::error!("Failed to update genre: {e}");
        ServiceError::Internal
    })?;

    log::debug!("Updated genre {}", genre.id);
    Ok(())
}

pub fn delete_genre<G>(request: DeleteGenreRequest, genre_repo: &G) -> ServiceResult<()>
where
    G: GenreReader + GenreWriter,
{
    match genre_repo.get_genre_by_id(request.id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::GenreNotFound(request.id)),
        Err(e) => {
            log::error!("Failed to get genre: {e}");
            return Err(ServiceError::Internal);
        }
    }

    genre_repo.delete_genre(request.id).map_err(|e| {
        log::error!("Failed to delete genre: {e}");
        ServiceError::Internal
    })?;

    log::info!("Deleted genre {}", request.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{GenreId, ValidationError};
    use crate::repository::{InMemoryCategoryRepository, InMemoryGenreRepository};

    struct Fixture {
        films: Category,
        series: Category,
        documentary: Category,
        categories: InMemoryCategoryRepository,
    }

    fn fixture() -> Fixture {
        let films = Category::new("Films")
            .unwrap()
            .with_description("Category for films");
        let series = Category::new("Series")
            .unwrap()
            .with_description("Category for series");
        let documentary = Category::new("Documentary")
            .unwrap()
            .with_description("Category for documentaries");
        let categories = InMemoryCategoryRepository::with_categories(vec![
            films.clone(),
            series.clone(),
            documentary.clone(),
        ]);
        Fixture {
            films,
            series,
            documentary,
            categories,
        }
    }

    #[test]
    fn creates_genre_with_existing_categories() {
        let fx = fixture();
        let genres = InMemoryGenreRepository::new();
        let request = CreateGenreRequest {
            category_ids: BTreeSet::from([fx.films.id, fx.series.id]),
            ..CreateGenreRequest::new("Action")
        };

        let response = create_genre(request, &genres, &fx.categories).unwrap();

        let stored = genres.get_genre_by_id(response.id).unwrap().unwrap();
        assert_eq!(stored.name, "Action");
        assert!(stored.is_active);
        assert_eq!(
            stored.categories,
            BTreeSet::from([fx.films.id, fx.series.id])
        );
    }

    #[test]
    fn creates_genre_without_categories() {
        let fx = fixture();
        let genres = InMemoryGenreRepository::new();
        let request = CreateGenreRequest {
            is_active: false,
            ..CreateGenreRequest::new("Action")
        };

        let response = create_genre(request, &genres, &fx.categories).unwrap();

        let stored = genres.get_genre_by_id(response.id).unwrap().unwrap();
        assert!(stored.categories.is_empty());
        assert!(!stored.is_active);
    }

    #[test]
    fn create_reports_missing_categories_and_stores_nothing() {
        let fx = fixture();
        let genres = InMemoryGenreRepository::new();
        let unknown = CategoryId::new();
        let request = CreateGenreRequest {
            category_ids: BTreeSet::from([fx.films.id, unknown]),
            ..CreateGenreRequest::new("Action")
        };

        let err = create_genre(request, &genres, &fx.categories).unwrap_err();

        assert_eq!(
            err,
            ServiceError::RelatedCategoriesNotFound(BTreeSet::from([unknown]))
        );
        assert!(err.to_string().contains(&unknown.to_string()));
        assert!(genres.is_empty());
    }

    #[test]
    fn create_rejects_invalid_name() {
        let fx = fixture();
        let genres = InMemoryGenreRepository::new();

        let err =
            create_genre(CreateGenreRequest::new(""), &genres, &fx.categories).unwrap_err();

        assert_eq!(
            err,
            ServiceError::InvalidGenre(ValidationError::EmptyString("name"))
        );
        assert!(genres.is_empty());
    }

    #[test]
    fn gets_and_lists_genres() {
        let fx = fixture();
        let action = Genre::new("Action")
            .unwrap()
            .with_categories([fx.films.id]);
        let drama = Genre::new("Drama").unwrap().with_active(false);
        let genres = InMemoryGenreRepository::with_genres(vec![action.clone(), drama.clone()]);

        let dto = get_genre(GetGenreRequest { id: action.id }, &genres).unwrap();
        assert_eq!(dto.name, "Action");
        assert_eq!(dto.categories, BTreeSet::from([fx.films.id]));

        let listed = list_genres(&genres).unwrap();
        assert_eq!(
            listed.data,
            vec![GenreDto::from(action), GenreDto::from(drama)]
        );
    }

    #[test]
    fn get_unknown_genre_fails() {
        let genres = InMemoryGenreRepository::new();
        let id = GenreId::new();

        assert_eq!(
            get_genre(GetGenreRequest { id }, &genres).unwrap_err(),
            ServiceError::GenreNotFound(id)
        );
        assert!(list_genres(&genres).unwrap().data.is_empty());
    }

    #[test]
    fn activates_genre_leaving_other_fields() {
        let fx = fixture();
        let drama = Genre::new("Drama").unwrap().with_active(false);
        let genres = InMemoryGenreRepository::with_genres(vec![drama.clone()]);
        let request = UpdateGenreRequest {
            is_active: Some(true),
            ..UpdateGenreRequest::new(drama.id)
        };

        update_genre(request, &genres, &fx.categories).unwrap();

        let stored = genres.get_genre_by_id(drama.id).unwrap().unwrap();
        assert!(stored.is_active);
        assert_eq!(stored.name, "Drama");
        assert!(stored.categories.is_empty());
    }

    #[test]
    fn updates_name_and_categories() {
        let fx = fixture();
        let comedy = Genre::new("Comedy")
            .unwrap()
            .with_categories([fx.series.id, fx.films.id]);
        let genres = InMemoryGenreRepository::with_genres(vec![comedy.clone()]);
        let request = UpdateGenreRequest {
            name: Some("Dark Comedy".into()),
            category_ids: Some(BTreeSet::from([fx.films.id, fx.documentary.id])),
            ..UpdateGenreRequest::new(comedy.id)
        };

        update_genre(request, &genres, &fx.categories).unwrap();

        let stored = genres.get_genre_by_id(comedy.id).unwrap().unwrap();
        assert_eq!(stored.name, "Dark Comedy");
        assert_eq!(
            stored.categories,
            BTreeSet::from([fx.films.id, fx.documentary.id])
        );
        assert!(stored.is_active);
    }

    #[test]
    fn empty_category_set_clears_categories() {
        let fx = fixture();
        let comedy = Genre::new("Comedy")
            .unwrap()
            .with_categories([fx.series.id]);
        let genres = InMemoryGenreRepository::with_genres(vec![comedy.clone()]);
        let request = UpdateGenreRequest {
            category_ids: Some(BTreeSet::new()),
            ..UpdateGenreRequest::new(comedy.id)
        };

        update_genre(request, &genres, &fx.categories).unwrap();

        let stored = genres.get_genre_by_id(comedy.id).unwrap().unwrap();
        assert!(stored.categories.is_empty());
        assert_eq!(stored.name, "Comedy");
    }

    #[test]
    fn update_with_unknown_category_changes_nothing() {
        let fx = fixture();
        let comedy = Genre::new("Comedy")
            .unwrap()
            .with_categories([fx.series.id]);
        let genres = InMemoryGenreRepository::with_genres(vec![comedy.clone()]);
        let unknown = CategoryId::new();
        let request = UpdateGenreRequest {
            name: Some("Dark Comedy".into()),
            is_active: Some(false),
            category_ids: Some(BTreeSet::from([fx.films.id, unknown])),
            ..UpdateGenreRequest::new(comedy.id)
        };

        let err = update_genre(request, &genres, &fx.categories).unwrap_err();

        assert_eq!(
            err,
            ServiceError::RelatedCategoriesNotFound(BTreeSet::from([unknown]))
        );
        let stored = genres.get_genre_by_id(comedy.id).unwrap().unwrap();
        assert_eq!(stored.name, "Comedy");
        assert!(stored.is_active);
        assert_eq!(stored.categories, BTreeSet::from([fx.series.id]));
    }

    #[test]
    fn update_checks_kept_categories_too() {
        let fx = fixture();
        let dangling = CategoryId::new();
        let comedy = Genre::new("Comedy").unwrap().with_categories([dangling]);
        let genres = InMemoryGenreRepository::with_genres(vec![comedy.clone()]);
        let request = UpdateGenreRequest {
            name: Some("Dark Comedy".into()),
            ..UpdateGenreRequest::new(comedy.id)
        };

        let err = update_genre(request, &genres, &fx.categories).unwrap_err();

        assert_eq!(
            err,
            ServiceError::RelatedCategoriesNotFound(BTreeSet::from([dangling]))
        );
        let stored = genres.get_genre_by_id(comedy.id).unwrap().unwrap();
        assert_eq!(stored.name, "Comedy");
    }

    #[test]
    fn update_with_invalid_name_changes_nothing() {
        let fx = fixture();
        let comedy = Genre::new("Comedy").unwrap();
        let genres = InMemoryGenreRepository::with_genres(vec![comedy.clone()]);
        let request = UpdateGenreRequest {
            name: Some(String::new()),
            category_ids: Some(BTreeSet::from([fx.films.id])),
            ..UpdateGenreRequest::new(comedy.id)
        };

        let err = update_genre(request, &genres, &fx.categories).unwrap_err();

        assert!(matches!(err, ServiceError::InvalidGenre(_)));
        let stored = genres.get_genre_by_id(comedy.id).unwrap().unwrap();
        assert_eq!(stored.name, "Comedy");
        assert!(stored.categories.is_empty());
    }

    #[test]
    fn update_unknown_genre_fails() {
        let fx = fixture();
        let genres = InMemoryGenreRepository::new();
        let id = GenreId::new();

        let err =
            update_genre(UpdateGenreRequest::new(id), &genres, &fx.categories).unwrap_err();

        assert_eq!(err, ServiceError::GenreNotFound(id));
    }

    #[test]
    fn deletes_genres() {
        let action = Genre::new("Action").unwrap();
        let drama = Genre::new("Drama").unwrap();
        let genres = InMemoryGenreRepository::with_genres(vec![action.clone(), drama.clone()]);

        delete_genre(DeleteGenreRequest { id: action.id }, &genres).unwrap();

        assert_eq!(genres.list_genres().unwrap(), vec![drama]);
    }

    #[test]
    fn delete_unknown_genre_fails() {
        let genres = InMemoryGenreRepository::with_genres(vec![Genre::new("Action").unwrap()]);
        let id = GenreId::new();

        let err = delete_genre(DeleteGenreRequest { id }, &genres).unwrap_err();

        assert_eq!(err, ServiceError::GenreNotFound(id));
        assert_eq!(genres.len(), 1);
    }
}

use crate::domain::category::Category;
use crate::dto::categories::{
    CategoryDto, CreateCategoryRequest, CreateCategoryResponse, DeleteCategoryRequest,
    GetCategoryRequest, ListCategoryResponse, UpdateCategoryRequest,
};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Validate and store a new category, returning its generated id.
pub fn create_category<R>(
    request: CreateCategoryRequest,
    repo: &R,
) -> ServiceResult<CreateCategoryResponse>
where
    R: CategoryWriter,
{
    let category = Category::new(request.name)
        .map_err(ServiceError::InvalidCategoryData)?
        .with_description(request.description)
        .with_active(request.is_active);

    repo.save_category(&category).map_err(|e| {
        log::error!("Failed to save category: {e}");
        ServiceError::Internal
    })?;

    log::info!("Created category {}", category.id);
    Ok(CreateCategoryResponse { id: category.id })
}

pub fn get_category<R>(request: GetCategoryRequest, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(request.id) {
        Ok(Some(category)) => Ok(CategoryDto::from(category)),
        Ok(None) => Err(ServiceError::CategoryNotFound(request.id)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_categories<R>(repo: &R) -> ServiceResult<ListCategoryResponse>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(ListCategoryResponse {
            data: categories.into_iter().map(CategoryDto::from).collect(),
        }),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Apply the fields present in `request` to an existing category.
///
/// Nothing is written unless every requested change is valid.
pub fn update_category<R>(request: UpdateCategoryRequest, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let mut category = match repo.get_category_by_id(request.id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::CategoryNotFound(request.id)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let name = request
        .name
        .unwrap_or_else(|| category.name.as_str().to_string());
    let description = request
        .description
        .unwrap_or_else(|| category.description.clone());

    category
        .update_category(name, description)
        .map_err(ServiceError::InvalidCategoryData)?;

    match request.is_active {
        Some(true) => category.activate(),
        Some(false) => category.deactivate(),
        None => {}
    }

    repo.update_category(&category).map_err(|e| {
        log::error!("Failed to update category: {e}");
        ServiceError::Internal
    })?;

    log::debug!("Updated category {}", category.id);
    Ok(())
}

pub fn delete_category<R>(request: DeleteCategoryRequest, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(request.id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::CategoryNotFound(request.id)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_category(request.id) {
        Ok(()) => {
            log::info!("Deleted category {}", request.id);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

use crate::components::entity::Entity;
use crate::components::mesh::MaterialKind;
use crate::renderer::instance::{MeshBuffer, MeshInstance};

/// Build the mesh instance buffer from entities with mesh components.
/// At most `max` instances are written; extra entities are dropped.
pub fn build_mesh_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut MeshBuffer,
    max: usize,
) {
    buffer.clear();
    for entity in entities {
        if buffer.instance_count() >= max {
            log::warn!("mesh buffer full ({max}), dropping '{}'", entity.tag);
            break;
        }
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let material = &mesh.material;
        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius(),
            rotation_y: entity.rotation_y,
            r: material.color.r,
            g: material.color.g,
            b: material.color.b,
            emissive_r: material.emissive.r,
            emissive_g: material.emissive.g,
            emissive_b: material.emissive.b,
            texture: material.texture.map_or(-1.0, |t| t.0 as f32),
            lit: match material.kind {
                MaterialKind::Basic => 0.0,
                MaterialKind::Standard => 1.0,
            },
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::api::types::EntityId;
    use crate::assets::registry::TextureId;
    use crate::components::mesh::{Material, MeshComponent, Rgb};

    #[test]
    fn build_mesh_buffer_from_entity_with_mesh() {
        let entity = Entity::new(EntityId(1))
            .with_pos(Vec3::new(50.0, 0.0, 75.0))
            .with_rotation_y(0.25)
            .with_mesh(
                MeshComponent::sphere(15.0, Material::standard(Rgb::new(1.0, 0.0, 0.0)))
                    .with_emissive(Rgb::from_hex(0x0000ff))
                    .with_texture(TextureId(3)),
            );

        let entities = vec![entity];
        let mut buffer = MeshBuffer::default();
        build_mesh_buffer(entities.iter(), &mut buffer, 16);

        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.as_slice()[0];
        assert_eq!(inst.x, 50.0);
        assert_eq!(inst.z, 75.0);
        assert_eq!(inst.radius, 15.0);
        assert_eq!(inst.rotation_y, 0.25);
        assert_eq!(inst.r, 1.0);
        assert_eq!(inst.emissive_b, 1.0);
        assert_eq!(inst.texture, 3.0);
        assert_eq!(inst.lit, 1.0);
    }

    #[test]
    fn untextured_basic_material_encoding() {
        let entity = Entity::new(EntityId(1))
            .with_mesh(MeshComponent::sphere(140.0, Material::basic(Rgb::from_hex(0xffff00))));
        let mut buffer = MeshBuffer::default();
        build_mesh_buffer(std::iter::once(&entity), &mut buffer, 16);
        let inst = buffer.as_slice()[0];
        assert_eq!(inst.texture, -1.0);
        assert_eq!(inst.lit, 0.0);
    }

    #[test]
    fn build_mesh_buffer_skips_inactive_and_no_mesh() {
        let mesh = MeshComponent::sphere(1.0, Material::standard(Rgb::WHITE));
        let e1 = Entity::new(EntityId(1)); // no mesh
        let mut e2 = Entity::new(EntityId(2)).with_mesh(mesh);
        e2.active = false; // inactive
        let e3 = Entity::new(EntityId(3)).with_mesh(mesh); // should appear

        let entities = vec![e1, e2, e3];
        let mut buffer = MeshBuffer::default();
        build_mesh_buffer(entities.iter(), &mut buffer, 16);

        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn capacity_is_respected() {
        let mesh = MeshComponent::sphere(1.0, Material::standard(Rgb::WHITE));
        let entities: Vec<Entity> = (0..5).map(|i| Entity::new(EntityId(i)).with_mesh(mesh)).collect();
        let mut buffer = MeshBuffer::default();
        build_mesh_buffer(entities.iter(), &mut buffer, 3);
        assert_eq!(buffer.instance_count(), 3);
    }
}
